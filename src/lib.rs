//! Rent Runner - a side-scrolling platformer about paying rent before burning out
//!
//! Core modules:
//! - `sim`: Per-frame simulation (physics, collisions, camera, game state)
//! - `renderer`: Read-only render snapshot and draw list for a graphics backend
//! - `input`: Keyboard/touch intents merged into one per-tick intent
//! - `assets`: Named sprite loading gate that must pass before the first tick
//! - `tuning`: Data-driven game balance
//! - `host`: Wall-clock frame driver

pub mod assets;
pub mod autopilot;
pub mod host;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use assets::{AssetLoadError, AssetSet, SpriteKey};
pub use host::{Host, HostError};
pub use input::{Action, InputSource, InputState};
pub use sim::Intent;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Viewport (canvas) dimensions in pixels
    pub const VIEWPORT_WIDTH: f32 = 960.0;
    pub const VIEWPORT_HEIGHT: f32 = 540.0;
    /// Total scrollable level width
    pub const WORLD_WIDTH: f32 = 3200.0;
    /// Thickness of the ground band at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 64.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1800.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const PLAYER_SPEED: f32 = 260.0;
    /// Negative = upward
    pub const PLAYER_JUMP_FORCE: f32 = -680.0;
    pub const PLAYER_START_X: f32 = 80.0;

    /// Hazard ("deadline") patrol
    pub const HAZARD_WIDTH: f32 = 56.0;
    pub const HAZARD_HEIGHT: f32 = 56.0;
    pub const HAZARD_SPEED: f32 = 140.0;
    pub const HAZARD_LEFT_BOUND: f32 = 1100.0;
    pub const HAZARD_RIGHT_BOUND: f32 = 1700.0;

    /// Burnout per hazard contact
    pub const BURNOUT_DAMAGE: u32 = 25;
    pub const BURNOUT_MAX: u32 = 100;
    /// Invincibility window after a hit (seconds)
    pub const GRACE_DURATION: f32 = 1.0;

    /// Credits per credit pickup
    pub const CREDIT_VALUE: u32 = 100;
    /// Credits needed to cover rent (HUD target)
    pub const RENT: u32 = 500;
    pub const PICKUP_SIZE: f32 = 32.0;

    /// How long a feed message stays on screen (seconds)
    pub const MESSAGE_DURATION: f32 = 2.5;
}
