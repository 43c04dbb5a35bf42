//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform dependencies:
//! - One synchronous tick per frame, driven by the host's elapsed time
//! - Systems run in a fixed order on a single owned `GameState`
//! - Stable iteration order (pickups keep their level order)

pub mod camera;
pub mod geometry;
pub mod hazard;
pub mod level;
pub mod messages;
pub mod physics;
pub mod pickups;
pub mod state;
pub mod tick;
pub mod timers;

pub use geometry::{Rect, overlaps};
pub use level::{LevelVariant, new_game};
pub use messages::{Message, MessageFeed};
pub use state::{
    BURNOUT_REASON, Counters, GAME_OVER_MESSAGE, GameEvent, GamePhase, GameState, Hazard, Pickup,
    Player, World,
};
pub use tick::{Intent, tick};
pub use timers::Countdown;
