//! Sprite quad generation
//!
//! Turns a [`RenderFrame`] into screen-space quads grouped by texture, in
//! back-to-front order: background, ground, pickups, hazard, player.

use super::frame::{RenderFrame, SpriteBox, tile_offsets};
use super::vertex::{Vertex, colors};
use crate::assets::{AssetSet, SpriteKey};
use crate::settings::Settings;
use crate::sim::Rect;

/// Blink period for the invincible player (seconds per on/off phase)
const BLINK_PERIOD: f32 = 0.1;

/// A run of vertices that share one texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBatch {
    pub key: SpriteKey,
    pub first_vertex: u32,
    pub vertex_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub batches: Vec<DrawBatch>,
}

impl DrawList {
    /// Build the quads for one frame. Sprites without a loaded image are skipped.
    pub fn build(frame: &RenderFrame, assets: &AssetSet, settings: &Settings) -> Self {
        let mut list = Self::default();
        let tint = if frame.game_over.is_some() {
            colors::GAME_OVER_DIM
        } else {
            colors::OPAQUE
        };

        // Background: full viewport height, parallax scroll
        if let Some(bg) = assets.get(SpriteKey::Background) {
            let scale = frame.viewport_height / bg.height.max(1) as f32;
            let tile_w = bg.width as f32 * scale;
            for x in tile_offsets(
                frame.camera_x,
                settings.effective_parallax(),
                tile_w,
                frame.viewport_width,
            ) {
                let rect = Rect::new(x, 0.0, tile_w, frame.viewport_height);
                list.push_quad(SpriteKey::Background, rect, tint);
            }
        }

        // Ground band: scrolls with the camera
        if let Some(ground) = assets.get(SpriteKey::Ground) {
            let band = frame.viewport_height - frame.ground_top;
            let scale = band / ground.height.max(1) as f32;
            let tile_w = ground.width as f32 * scale;
            for x in tile_offsets(frame.camera_x, 1.0, tile_w, frame.viewport_width) {
                let rect = Rect::new(x, frame.ground_top, tile_w, band);
                list.push_quad(SpriteKey::Ground, rect, tint);
            }
        }

        for pickup in frame.pickups.iter().filter(|p| !p.collected) {
            list.push_sprite(frame, assets, &pickup.sprite, tint);
        }

        if let Some(hazard) = &frame.hazard {
            list.push_sprite(frame, assets, hazard, tint);
        }

        let player_tint = if settings.effective_blink() && blink_off(frame.invincible) {
            colors::BLINK
        } else {
            tint
        };
        list.push_sprite(frame, assets, &frame.player, player_tint);

        list
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Raw vertex bytes for upload to a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of quads drawn with a given texture
    pub fn quad_count(&self, key: SpriteKey) -> usize {
        self.batches
            .iter()
            .filter(|b| b.key == key)
            .map(|b| b.vertex_count as usize / 6)
            .sum()
    }

    /// World-space sprite, culled when fully off screen
    fn push_sprite(
        &mut self,
        frame: &RenderFrame,
        assets: &AssetSet,
        sprite: &SpriteBox,
        tint: [f32; 4],
    ) {
        if !assets.contains(sprite.key) {
            return;
        }
        let screen = sprite.rect.offset_x(-frame.camera_x);
        if screen.right() < 0.0 || screen.left() > frame.viewport_width {
            return;
        }
        self.push_quad(sprite.key, screen, tint);
    }

    fn push_quad(&mut self, key: SpriteKey, rect: Rect, color: [f32; 4]) {
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        let first = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[
            Vertex::new(l, t, 0.0, 0.0, color),
            Vertex::new(r, t, 1.0, 0.0, color),
            Vertex::new(r, b, 1.0, 1.0, color),
            Vertex::new(l, t, 0.0, 0.0, color),
            Vertex::new(r, b, 1.0, 1.0, color),
            Vertex::new(l, b, 0.0, 1.0, color),
        ]);

        // Extend the last batch when the texture repeats
        match self.batches.last_mut() {
            Some(batch) if batch.key == key => batch.vertex_count += 6,
            _ => self.batches.push(DrawBatch {
                key,
                first_vertex: first,
                vertex_count: 6,
            }),
        }
    }
}

/// True during the "hidden" half of each blink cycle
fn blink_off(invincible: f32) -> bool {
    invincible > 0.0 && ((invincible / BLINK_PERIOD) as u32).is_multiple_of(2)
}
