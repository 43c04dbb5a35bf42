//! Countdown timers measured in seconds of simulation time

use serde::{Deserialize, Serialize};

/// A value that counts down toward zero as simulation time passes.
///
/// Never goes negative: a step larger than the remaining time lands on zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub const fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    /// An already-expired timer
    pub const fn expired() -> Self {
        Self { remaining: 0.0 }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Restart the countdown
    pub fn reset(&mut self, seconds: f32) {
        self.remaining = seconds;
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Fraction of `total` still left, in [0, 1]
    pub fn ratio(&self, total: f32) -> f32 {
        if total <= 0.0 {
            return 0.0;
        }
        (self.remaining / total).clamp(0.0, 1.0)
    }
}
