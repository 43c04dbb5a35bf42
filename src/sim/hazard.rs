//! Hazard patrol and contact damage

use super::geometry::overlaps;
use super::state::{BURNOUT_REASON, GameEvent, GameState, Hazard};

impl Hazard {
    /// Move along the patrol line, bouncing off the bounds.
    ///
    /// Returns true if the hazard turned around this step.
    pub fn patrol(&mut self, dt: f32) -> bool {
        self.pos.x += self.vx * dt;

        // Landing exactly on a bound is in range; the turn happens next step
        if self.pos.x < self.left_bound {
            self.pos.x = self.left_bound;
            self.vx = -self.vx;
            return true;
        }
        let max_x = self.max_x();
        if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vx = -self.vx;
            return true;
        }
        false
    }
}

/// Move the hazard, then apply burnout if it touches the player outside the
/// grace window.
pub fn update_hazard(state: &mut GameState, dt: f32) {
    let Some(hazard) = state.hazard.as_mut() else {
        return;
    };

    if hazard.patrol(dt) {
        state.events.push(GameEvent::HazardTurned);
    }

    if !overlaps(&hazard.bounds(), &state.player.bounds()) {
        return;
    }
    // Damage at most once per grace window, however long the contact lasts
    if !state.counters.invincible.is_expired() {
        return;
    }

    let counters = &mut state.counters;
    counters.burnout = counters
        .burnout
        .saturating_add(state.tuning.burnout_damage)
        .min(counters.burnout_max);
    counters.invincible.reset(state.tuning.grace_duration);
    let burnout = counters.burnout;
    let burnout_max = counters.burnout_max;

    log::debug!("Hazard contact: burnout {}/{}", burnout, burnout_max);
    state
        .messages
        .post(format!("Deadline hit! Burnout {}/{}", burnout, burnout_max));
    state.events.push(GameEvent::Damaged { burnout });

    if burnout >= burnout_max {
        state.end_run(BURNOUT_REASON);
    }
}
