//! Player movement: input, gravity, integration, world clamp and ground snap
//!
//! The ground band is the only solid surface. There are no ceilings or
//! platforms.

use super::state::{Player, World};
use super::tick::Intent;

/// Advance the player by `dt` seconds. Returns true if a jump started.
pub fn update_player(
    player: &mut Player,
    world: &World,
    intent: &Intent,
    gravity: f32,
    dt: f32,
) -> bool {
    // Horizontal velocity is fully input-driven. Right is applied last so it
    // wins when both directions are held.
    player.vel.x = 0.0;
    if intent.left {
        player.vel.x = -player.speed;
    }
    if intent.right {
        player.vel.x = player.speed;
    }

    // No double-jump and no buffering
    let jumped = intent.jump && player.on_ground;
    if jumped {
        player.vel.y = player.jump_force;
        player.on_ground = false;
    }

    player.vel.y += gravity * dt;

    player.pos += player.vel * dt;

    let max_x = (world.width - player.size.x).max(0.0);
    player.pos.x = player.pos.x.clamp(0.0, max_x);

    // Position snap, not a swept test: a huge dt still lands on the floor
    let floor = world.floor_for(player.size.y);
    if player.pos.y > floor {
        player.pos.y = floor;
        player.vel.y = 0.0;
        player.on_ground = true;
    }

    jumped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn setup() -> (Player, World, Tuning) {
        let tuning = Tuning::default();
        let world = World::from_tuning(&tuning);
        let player = Player::new(&tuning, &world);
        (player, world, tuning)
    }

    #[test]
    fn test_left_at_world_edge_is_clamped() {
        let (mut player, world, tuning) = setup();
        player.pos.x = 0.0;
        let intent = Intent {
            left: true,
            ..Default::default()
        };
        update_player(&mut player, &world, &intent, tuning.gravity, 0.1);
        assert_eq!(player.pos.x, 0.0);
        assert_eq!(player.vel.x, -player.speed);
    }

    #[test]
    fn test_right_edge_clamp() {
        let (mut player, world, tuning) = setup();
        player.pos.x = world.width - player.size.x - 1.0;
        let intent = Intent {
            right: true,
            ..Default::default()
        };
        update_player(&mut player, &world, &intent, tuning.gravity, 0.5);
        assert_eq!(player.pos.x, world.width - player.size.x);
    }

    #[test]
    fn test_right_wins_tie() {
        let (mut player, world, tuning) = setup();
        let start = player.pos.x;
        let intent = Intent {
            left: true,
            right: true,
            jump: false,
        };
        update_player(&mut player, &world, &intent, tuning.gravity, 0.1);
        assert_eq!(player.vel.x, player.speed);
        assert!(player.pos.x > start);
    }

    #[test]
    fn test_no_input_stops_horizontal_motion() {
        let (mut player, world, tuning) = setup();
        player.vel.x = 500.0;
        let start = player.pos.x;
        update_player(&mut player, &world, &Intent::default(), tuning.gravity, 0.1);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.pos.x, start);
    }

    #[test]
    fn test_jump_from_ground() {
        let (mut player, world, _) = setup();
        let intent = Intent {
            jump: true,
            ..Default::default()
        };
        // Gravity disabled to observe the raw jump impulse
        let jumped = update_player(&mut player, &world, &intent, 0.0, 0.016);
        assert!(jumped);
        assert_eq!(player.vel.y, player.jump_force);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_jump_then_gravity_accrues() {
        let (mut player, world, tuning) = setup();
        let jump = Intent {
            jump: true,
            ..Default::default()
        };
        update_player(&mut player, &world, &jump, tuning.gravity, 0.016);
        let vy_after_jump = player.vel.y;
        assert!(!player.on_ground);
        assert!((vy_after_jump - (player.jump_force + tuning.gravity * 0.016)).abs() < 1e-3);

        update_player(&mut player, &world, &Intent::default(), tuning.gravity, 0.016);
        assert!((player.vel.y - (vy_after_jump + tuning.gravity * 0.016)).abs() < 1e-3);
    }

    #[test]
    fn test_no_double_jump() {
        let (mut player, world, tuning) = setup();
        let jump = Intent {
            jump: true,
            ..Default::default()
        };
        assert!(update_player(&mut player, &world, &jump, tuning.gravity, 0.016));
        let vy = player.vel.y;
        assert!(!update_player(&mut player, &world, &jump, tuning.gravity, 0.016));
        assert!(player.vel.y > vy, "second press must not reapply jump force");
    }

    #[test]
    fn test_lands_on_floor() {
        let (mut player, world, tuning) = setup();
        player.pos = Vec2::new(100.0, 0.0);
        player.on_ground = false;
        // One enormous step still ends on the floor
        update_player(&mut player, &world, &Intent::default(), tuning.gravity, 5.0);
        assert_eq!(player.pos.y, world.floor_for(player.size.y));
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
    }
}
