//! Render consumer contract
//!
//! The simulation never draws. A backend takes a [`RenderFrame`] snapshot
//! after each tick and turns it into a [`DrawList`] of textured quads in
//! screen space, plus a [`Hud`] of text runs for the counters and feed.

pub mod frame;
pub mod hud;
pub mod shapes;
pub mod vertex;

pub use frame::{MessageView, PickupView, RenderFrame, SpriteBox, tile_offsets};
pub use hud::{Hud, TextRun};
pub use shapes::{DrawBatch, DrawList};
pub use vertex::Vertex;
