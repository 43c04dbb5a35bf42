//! Display preferences
//!
//! Only affect how a frame is presented, never the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background scroll speed relative to the camera (0 = static, 1 = ground speed)
    pub parallax_factor: f32,
    /// Fade feed messages out as they expire
    pub message_fade: bool,
    /// Blink the player during the invincibility window
    pub invincibility_blink: bool,
    /// Show burnout/credits HUD
    pub show_hud: bool,

    // === Accessibility ===
    /// Reduced motion (static background, no blinking)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parallax_factor: 0.3,
            message_fade: true,
            invincibility_blink: true,
            show_hud: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Read settings from a JSON file. A missing or unreadable file gives the
    /// defaults; display preferences never block a session.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read settings {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Effective parallax (respects reduced_motion)
    pub fn effective_parallax(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            self.parallax_factor
        }
    }

    /// Effective blink (respects reduced_motion)
    pub fn effective_blink(&self) -> bool {
        self.invincibility_blink && !self.reduced_motion
    }

    /// Opacity for a message with `ratio` of its lifetime left
    pub fn message_alpha(&self, ratio: f32) -> f32 {
        if self.message_fade {
            ratio.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}
