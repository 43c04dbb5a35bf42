//! Horizontal camera that keeps the player centered inside the world

use super::state::{Player, World};

/// Scroll offset that centers the player, clamped so the viewport never
/// shows past either end of the world.
pub fn camera_x(player: &Player, world: &World) -> f32 {
    let center = player.pos.x + player.size.x / 2.0;
    let max_x = (world.width - world.viewport_width).max(0.0);
    (center - world.viewport_width / 2.0).min(max_x).max(0.0)
}
