//! Attract-mode autopilot
//!
//! Plays the level without a human: runs toward the far end and back,
//! jumps over the hazard, jumps for raised credits and throws in the odd
//! random hop. Seeded so a demo run replays identically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameState, Intent, Rect};

/// How close (px) the hazard gets before the autopilot jumps
const REACTION_DISTANCE: f32 = 110.0;
/// Horizontal slack (px) for jumping under a raised credit
const CREDIT_REACH: f32 = 24.0;
/// Random hops per second while walking
const HOP_RATE: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Right,
    Left,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    heading: Heading,
    hop_rate: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            heading: Heading::Right,
            hop_rate: HOP_RATE,
        }
    }

    /// Override the random hop frequency (0 disables hops)
    pub fn with_hop_rate(mut self, hops_per_second: f32) -> Self {
        self.hop_rate = hops_per_second.max(0.0);
        self
    }

    /// Decide the intent for the next tick
    pub fn next_intent(&mut self, state: &GameState, dt: f32) -> Intent {
        if !state.is_running() {
            return Intent::default();
        }

        let player = state.player.bounds();
        let max_x = state.world.width - player.size.x;
        if player.left() >= max_x {
            self.heading = Heading::Left;
        } else if player.left() <= 0.0 {
            self.heading = Heading::Right;
        }

        let mut intent = Intent {
            left: self.heading == Heading::Left,
            right: self.heading == Heading::Right,
            jump: false,
        };

        if !state.player.on_ground {
            return intent;
        }

        let hazard_close = state
            .hazard
            .as_ref()
            .is_some_and(|h| self.gap_ahead(&player, &h.bounds()) <= REACTION_DISTANCE);

        let credit_overhead = state.credits.iter().any(|c| {
            let r = c.bounds();
            !c.collected
                && r.bottom() < player.top()
                && r.right() + CREDIT_REACH >= player.left()
                && r.left() - CREDIT_REACH <= player.right()
        });

        let hop = self.hop_rate > 0.0
            && self
                .rng
                .random_bool((self.hop_rate * dt).clamp(0.0, 1.0) as f64);

        intent.jump = hazard_close || credit_overhead || hop;
        intent
    }

    /// Horizontal distance from the player's leading edge to `other`.
    /// Infinite when `other` is behind.
    fn gap_ahead(&self, player: &Rect, other: &Rect) -> f32 {
        let gap = match self.heading {
            Heading::Right => other.left() - player.right(),
            Heading::Left => player.left() - other.right(),
        };
        if gap < -other.size.x {
            f32::INFINITY
        } else {
            gap
        }
    }
}
