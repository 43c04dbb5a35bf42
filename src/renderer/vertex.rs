//! Vertex types for 2D sprite rendering

use bytemuck::{Pod, Zeroable};

/// Screen-space vertex with texture coordinates and a tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}

/// Tints for sprite quads
pub mod colors {
    pub const OPAQUE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Player during the invincibility blink
    pub const BLINK: [f32; 4] = [1.0, 1.0, 1.0, 0.35];
    /// Whole scene once the run is over
    pub const GAME_OVER_DIM: [f32; 4] = [0.55, 0.55, 0.6, 1.0];
}
