//! Per-frame simulation tick
//!
//! Runs the systems in a fixed order with the frame's elapsed time. There is
//! no fixed-step accumulator: `dt` is whatever the host measured, so a long
//! stall turns into one large step.

use super::camera::camera_x;
use super::hazard::update_hazard;
use super::physics::update_player;
use super::pickups::resolve_pickups;
use super::state::{GameEvent, GameState};

/// Directional intent sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl Intent {
    /// Per-field OR of two intents
    pub fn merge(self, other: Intent) -> Intent {
        Intent {
            left: self.left || other.left,
            right: self.right || other.right,
            jump: self.jump || other.jump,
        }
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, intent: &Intent, dt: f32) {
    state.events.clear();
    state.ticks += 1;
    state.elapsed += dt as f64;

    // Game over freezes the world; only the camera and the feed keep going
    if state.is_running() {
        if update_player(
            &mut state.player,
            &state.world,
            intent,
            state.tuning.gravity,
            dt,
        ) {
            state.events.push(GameEvent::Jumped);
        }

        // Must follow the player move so contact uses this tick's positions
        update_hazard(state, dt);
        resolve_pickups(state);

        state.counters.invincible.tick(dt);
    }

    state.camera_x = camera_x(&state.player, &state.world);

    state.messages.update(dt);
}
