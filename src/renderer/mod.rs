//! Render-ready snapshot of the simulation
//!
//! Consumers draw `FrameView`; nothing here mutates simulation state.

pub mod vertex;
pub mod view;

pub use vertex::{Sprite, SpriteKind, colors, rgb};
pub use view::{FrameView, tile_center};
