//! Sprite instance types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// What a sprite depicts; stored in `Sprite::kind`
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Wall = 0,
    Pellet = 1,
    PowerPellet = 2,
    Fruit = 3,
    Player = 4,
    Ghost = 5,
}

/// One instanced sprite: center and radius in pixels, RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Sprite {
    pub center: [f32; 2],
    /// Half extent (radius for round sprites, half side for walls)
    pub radius: f32,
    pub kind: u32,
    pub color: [f32; 4],
}

impl Sprite {
    pub const fn new(kind: SpriteKind, x: f32, y: f32, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: [x, y],
            radius,
            kind: kind as u32,
            color,
        }
    }
}

/// Convert 0xRRGGBB to an opaque RGBA color
pub fn rgb(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: u32 = 0x030714;
    pub const WALL: u32 = 0x1f5fff;
    pub const PELLET: u32 = 0xffe082;
    pub const POWER_PELLET: u32 = 0xfff176;
    pub const FRUIT: u32 = 0xef5350;
    pub const PLAYER: u32 = 0xffeb3b;
    pub const FRIGHTENED: u32 = 0x42a5f5;
    pub const HUD: u32 = 0xffffff;
}
