//! Data-driven game balance
//!
//! Every fixed amount the simulation uses lives here so a level can be
//! rebalanced from a JSON file without recompiling. Missing fields fall back
//! to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Balance constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub world_width: f32,
    pub ground_height: f32,
    pub gravity: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    /// Initial vertical velocity of a jump (negative = up)
    pub jump_force: f32,
    pub player_start_x: f32,

    // === Hazard ===
    pub hazard_width: f32,
    pub hazard_height: f32,
    pub hazard_speed: f32,
    pub patrol_left: f32,
    pub patrol_right: f32,

    // === Counters ===
    pub burnout_damage: u32,
    pub burnout_max: u32,
    pub grace_duration: f32,
    pub credit_value: u32,
    pub rent: u32,

    // === Pickups / feed ===
    pub pickup_size: f32,
    pub message_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            world_width: WORLD_WIDTH,
            ground_height: GROUND_HEIGHT,
            gravity: GRAVITY,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            player_start_x: PLAYER_START_X,

            hazard_width: HAZARD_WIDTH,
            hazard_height: HAZARD_HEIGHT,
            hazard_speed: HAZARD_SPEED,
            patrol_left: HAZARD_LEFT_BOUND,
            patrol_right: HAZARD_RIGHT_BOUND,

            burnout_damage: BURNOUT_DAMAGE,
            burnout_max: BURNOUT_MAX,
            grace_duration: GRACE_DURATION,
            credit_value: CREDIT_VALUE,
            rent: RENT,

            pickup_size: PICKUP_SIZE,
            message_duration: MESSAGE_DURATION,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: String| Err(TuningError::Invalid(msg));

        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return invalid("viewport must have a positive size".into());
        }
        if self.world_width < self.viewport_width {
            return invalid(format!(
                "world_width ({}) is narrower than viewport_width ({})",
                self.world_width, self.viewport_width
            ));
        }
        if self.ground_height + self.player_height > self.viewport_height {
            return invalid("player does not fit above the ground band".into());
        }
        if self.player_width <= 0.0 || self.player_width > self.world_width {
            return invalid(format!("player_width {} out of range", self.player_width));
        }
        let max_start = self.world_width - self.player_width;
        if !(0.0..=max_start).contains(&self.player_start_x) {
            return invalid(format!(
                "player_start_x {} outside [0, {}]",
                self.player_start_x, max_start
            ));
        }
        if self.jump_force >= 0.0 {
            return invalid("jump_force must be negative (upward)".into());
        }
        if self.patrol_left < 0.0 || self.patrol_right > self.world_width {
            return invalid("patrol bounds must lie inside the world".into());
        }
        if self.patrol_right - self.patrol_left < self.hazard_width {
            return invalid(format!(
                "patrol range [{}, {}] cannot fit a hazard {} wide",
                self.patrol_left, self.patrol_right, self.hazard_width
            ));
        }
        if self.burnout_max == 0 {
            return invalid("burnout_max must be positive".into());
        }
        if self.grace_duration <= 0.0 || self.message_duration <= 0.0 {
            return invalid("grace_duration and message_duration must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "burnout_max": 50, "gravity": 900.0 }"#).unwrap();
        assert_eq!(tuning.burnout_max, 50);
        assert_eq!(tuning.gravity, 900.0);
        assert_eq!(tuning.world_width, WORLD_WIDTH);
    }

    #[test]
    fn test_world_narrower_than_viewport_rejected() {
        let result = Tuning::from_json(r#"{ "world_width": 500.0 }"#);
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_patrol_too_narrow_rejected() {
        let tuning = Tuning {
            patrol_left: 100.0,
            patrol_right: 120.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_start_outside_world_rejected() {
        for x in [-1.0, WORLD_WIDTH - PLAYER_WIDTH + 1.0] {
            let tuning = Tuning {
                player_start_x: x,
                ..Default::default()
            };
            assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));
        }

        let at_edge = Tuning {
            player_start_x: WORLD_WIDTH - PLAYER_WIDTH,
            ..Default::default()
        };
        assert!(at_edge.validate().is_ok());
    }

    #[test]
    fn test_huge_amounts_are_accepted() {
        let tuning = Tuning::from_json(r#"{ "credit_value": 1000000000 }"#).unwrap();
        assert_eq!(tuning.credit_value, 1_000_000_000);
    }

    #[test]
    fn test_bad_json_is_json_error() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Tuning::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(TuningError::Io(_))));
    }
}
