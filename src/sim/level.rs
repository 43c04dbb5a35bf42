//! Scripted level layouts
//!
//! One hand-placed level. `Standard` is the full game; `Basic` keeps only the
//! player and the coffee.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Hazard, Pickup};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelVariant {
    #[default]
    Standard,
    /// No hazard, no credits
    Basic,
}

/// Coffee placement: (x, height of its bottom edge above the ground)
const COFFEE_SPOT: (f32, f32) = (520.0, 0.0);

/// Credit chips, left to right. Raised ones need a jump.
const CREDIT_SPOTS: [(f32, f32); 5] = [
    (380.0, 0.0),
    (900.0, 90.0),
    (1400.0, 0.0), // inside the hazard's patrol
    (2050.0, 120.0),
    (2750.0, 40.0),
];

/// Build a fresh run of the given level
pub fn new_game(tuning: Tuning, variant: LevelVariant) -> GameState {
    let mut state = GameState::new(tuning);
    populate(&mut state, variant);
    state
}

/// Place the hazard and pickups for `variant`, replacing any already placed
pub fn populate(state: &mut GameState, variant: LevelVariant) {
    let size = state.tuning.pickup_size;
    let world = state.world;
    let place = |(x, lift): (f32, f32)| {
        let x = x.min(world.width - size).max(0.0);
        Pickup::new(Vec2::new(x, world.ground_top() - size - lift), size)
    };

    state.coffee = Some(place(COFFEE_SPOT));

    match variant {
        LevelVariant::Standard => {
            state.hazard = Some(Hazard::new(&state.tuning, &world));
            state.credits = CREDIT_SPOTS.iter().copied().map(place).collect();
            log::debug!(
                "{} credits on the map, rent is {}",
                standard_credit_total(&state.tuning),
                state.counters.rent
            );
        }
        LevelVariant::Basic => {
            state.hazard = None;
            state.credits.clear();
        }
    }

    log::info!(
        "Level {:?}: world={}, credits={}, hazard={}",
        variant,
        world.width,
        state.credits.len(),
        state.hazard.is_some()
    );
}

/// Credits available in the standard level at the given tuning
pub fn standard_credit_total(tuning: &Tuning) -> u32 {
    (CREDIT_SPOTS.len() as u32).saturating_mul(tuning.credit_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let state = new_game(Tuning::default(), LevelVariant::Standard);
        assert!(state.hazard.is_some());
        assert!(state.coffee.is_some());
        assert_eq!(state.credits.len(), CREDIT_SPOTS.len());
        assert!(state.credits.iter().all(|c| !c.collected));
        // Enough credits on the map to cover rent at default tuning
        assert!(standard_credit_total(&state.tuning) >= state.counters.rent);
    }

    #[test]
    fn test_credit_total_saturates() {
        let tuning = Tuning {
            credit_value: 1_000_000_000,
            ..Default::default()
        };
        assert_eq!(standard_credit_total(&tuning), u32::MAX);
    }

    #[test]
    fn test_basic_layout() {
        let state = new_game(Tuning::default(), LevelVariant::Basic);
        assert!(state.hazard.is_none());
        assert!(state.credits.is_empty());
        assert!(state.coffee.is_some());
    }

    #[test]
    fn test_pickups_inside_world_and_above_ground() {
        let tuning = Tuning {
            world_width: 1000.0,
            patrol_left: 100.0,
            patrol_right: 400.0,
            ..Default::default()
        };
        let state = new_game(tuning, LevelVariant::Standard);
        for p in state.credits.iter().chain(state.coffee.iter()) {
            assert!(p.pos.x >= 0.0 && p.bounds().right() <= state.world.width);
            assert!(p.bounds().bottom() <= state.world.ground_top());
        }
    }

    #[test]
    fn test_hazard_starts_inside_patrol() {
        let state = new_game(Tuning::default(), LevelVariant::Standard);
        let h = state.hazard.unwrap();
        assert!(h.pos.x >= h.left_bound && h.pos.x <= h.max_x());
    }
}
