//! Read-only per-tick snapshot for renderers and HUDs

use serde::{Deserialize, Serialize};

use crate::assets::SpriteKey;
use crate::sim::{GameState, Rect};

/// A sprite and where it sits in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteBox {
    pub key: SpriteKey,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub sprite: SpriteBox,
    pub collected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageView {
    pub text: String,
    /// Remaining lifetime as a fraction of the full display duration
    pub ratio: f32,
}

/// Everything a renderer may read about one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub camera_x: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_top: f32,
    pub player: SpriteBox,
    /// Seconds of invincibility left (player blinks while > 0)
    pub invincible: f32,
    pub hazard: Option<SpriteBox>,
    /// Coffee first, then credits in level order
    pub pickups: Vec<PickupView>,
    pub burnout: u32,
    pub burnout_max: u32,
    pub credits: u32,
    pub rent: u32,
    pub rent_covered: bool,
    /// Top-to-bottom display order
    pub messages: Vec<MessageView>,
    /// Set once the run has ended
    pub game_over: Option<String>,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        let pickup = |key: SpriteKey, p: &crate::sim::Pickup| PickupView {
            sprite: SpriteBox {
                key,
                rect: p.bounds(),
            },
            collected: p.collected,
        };

        let pickups = state
            .coffee
            .iter()
            .map(|c| pickup(SpriteKey::Coffee, c))
            .chain(state.credits.iter().map(|c| pickup(SpriteKey::Credit, c)))
            .collect();

        let messages = state
            .messages
            .iter()
            .map(|m| MessageView {
                text: m.text.clone(),
                ratio: state.messages.ratio(m),
            })
            .collect();

        Self {
            camera_x: state.camera_x,
            viewport_width: state.world.viewport_width,
            viewport_height: state.world.viewport_height,
            ground_top: state.world.ground_top(),
            player: SpriteBox {
                key: SpriteKey::Player,
                rect: state.player.bounds(),
            },
            invincible: state.counters.invincible.remaining(),
            hazard: state.hazard.as_ref().map(|h| SpriteBox {
                key: SpriteKey::Hazard,
                rect: h.bounds(),
            }),
            pickups,
            burnout: state.counters.burnout,
            burnout_max: state.counters.burnout_max,
            credits: state.counters.credits,
            rent: state.counters.rent,
            rent_covered: state.counters.rent_covered(),
            messages,
            game_over: state.game_over_reason().map(str::to_string),
        }
    }

    /// Burnout bar fill in [0, 1]
    pub fn burnout_fraction(&self) -> f32 {
        if self.burnout_max == 0 {
            return 0.0;
        }
        (self.burnout as f32 / self.burnout_max as f32).min(1.0)
    }

    /// HUD line, e.g. "Credits 300 / 500"
    pub fn credits_label(&self) -> String {
        format!("Credits {} / {}", self.credits, self.rent)
    }
}

/// Screen x of every tile needed to cover the viewport.
///
/// The layer scrolls at `factor` times the camera speed (1.0 for the ground,
/// less for a parallax background). Depends only on the camera offset.
pub fn tile_offsets(camera_x: f32, factor: f32, tile_width: f32, viewport_width: f32) -> Vec<f32> {
    if tile_width <= 0.0 {
        return Vec::new();
    }
    let scroll = camera_x * factor;
    let mut x = -scroll.rem_euclid(tile_width);
    let mut offsets = Vec::new();
    while x < viewport_width {
        offsets.push(x);
        x += tile_width;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Intent, LevelVariant, new_game, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_standard_level() {
        let mut state = new_game(Tuning::default(), LevelVariant::Standard);
        tick(&mut state, &Intent::default(), 1.0 / 60.0);
        let frame = RenderFrame::capture(&state);

        assert_eq!(frame.player.key, SpriteKey::Player);
        assert_eq!(frame.hazard.unwrap().key, SpriteKey::Hazard);
        assert_eq!(frame.pickups.len(), 1 + state.credits.len());
        assert_eq!(frame.pickups[0].sprite.key, SpriteKey::Coffee);
        assert!(frame.pickups[1..].iter().all(|p| p.sprite.key == SpriteKey::Credit));
        assert_eq!(frame.credits_label(), "Credits 0 / 500");
        assert!(!frame.rent_covered);
        assert_eq!(frame.burnout_fraction(), 0.0);
        assert!(frame.game_over.is_none());
    }

    #[test]
    fn test_capture_message_ratio() {
        let mut state = new_game(Tuning::default(), LevelVariant::Basic);
        state.messages.post("hi");
        let half = state.tuning.message_duration / 2.0;
        tick(&mut state, &Intent::default(), half);
        let frame = RenderFrame::capture(&state);
        assert_eq!(frame.messages.len(), 1);
        assert!((frame.messages[0].ratio - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_capture_game_over_reason() {
        let mut state = new_game(Tuning::default(), LevelVariant::Standard);
        state.end_run(crate::sim::BURNOUT_REASON);
        let frame = RenderFrame::capture(&state);
        assert_eq!(frame.game_over.as_deref(), Some(crate::sim::BURNOUT_REASON));
    }

    #[test]
    fn test_frame_serializes() {
        let state = new_game(Tuning::default(), LevelVariant::Standard);
        let json = serde_json::to_string(&RenderFrame::capture(&state)).unwrap();
        assert!(json.contains("\"camera_x\""));
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let offsets = tile_offsets(0.0, 1.0, 100.0, 350.0);
        assert_eq!(offsets, vec![0.0, 100.0, 200.0, 300.0]);

        let offsets = tile_offsets(130.0, 1.0, 100.0, 350.0);
        assert_eq!(offsets, vec![-30.0, 70.0, 170.0, 270.0]);
        assert!(offsets[0] <= 0.0);
        assert!(offsets.last().unwrap() + 100.0 >= 350.0);
    }

    #[test]
    fn test_parallax_scrolls_slower() {
        // Half-speed layer at camera 200 looks like the ground at camera 100
        assert_eq!(
            tile_offsets(200.0, 0.5, 64.0, 300.0),
            tile_offsets(100.0, 1.0, 64.0, 300.0)
        );
        // Static layer never moves
        assert_eq!(tile_offsets(999.0, 0.0, 64.0, 300.0)[0], 0.0);
    }

    #[test]
    fn test_zero_width_tile() {
        assert!(tile_offsets(10.0, 1.0, 0.0, 300.0).is_empty());
    }
}
