//! One-shot pickups: the coffee and the credit chips

use super::geometry::overlaps;
use super::state::{GameEvent, GameState};

pub const COFFEE_MESSAGE: &str = "Coffee acquired. Focus restored... sort of.";

/// Collect every uncollected pickup the player is touching
pub fn resolve_pickups(state: &mut GameState) {
    let player = state.player.bounds();

    if let Some(coffee) = state.coffee.as_mut()
        && overlaps(&coffee.bounds(), &player)
        && coffee.collect()
    {
        state.messages.post(COFFEE_MESSAGE);
        state.events.push(GameEvent::CoffeeCollected);
    }

    for (index, credit) in state.credits.iter_mut().enumerate() {
        if credit.collected || !overlaps(&credit.bounds(), &player) {
            continue;
        }
        credit.collect();
        state.counters.credits = state.counters.credits.saturating_add(state.tuning.credit_value);
        let total = state.counters.credits;
        log::debug!("Credit {} collected, total {}", index, total);
        state.messages.post(format!(
            "+{} credits ({}/{} rent)",
            state.tuning.credit_value, total, state.counters.rent
        ));
        state.events.push(GameEvent::CreditCollected { index, total });
    }
}
