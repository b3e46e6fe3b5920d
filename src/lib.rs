//! Maze Chase - A tile-based pellet chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, movement, pathfinding, scoring, game state)
//! - `audio`: Fire-and-forget notification bus for sound adapters
//! - `renderer`: Render-ready snapshot of the simulation
//! - `platform`: Fixed-step clock and input adapter contract
//! - `game`: Host frame driver tying the above together

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioBus, AudioCue, Subscription};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Upper bound on a single frame's elapsed time to prevent runaway catch-up
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Length of a round in seconds
    pub const ROUND_SECONDS: f32 = 180.0;
    /// Frightened mode duration after a power pellet
    pub const FRIGHTENED_SECONDS: f32 = 6.0;
    /// Respawn countdown for an eaten ghost
    pub const RESPAWN_SECONDS: f32 = 3.0;

    /// Speed multiplier inside the final 90 seconds
    pub const LATE_MULTIPLIER: f32 = 1.2;
    /// Speed multiplier inside the final 45 seconds
    pub const FINAL_MULTIPLIER: f32 = 1.35;
    pub const LATE_THRESHOLD: f32 = 90.0;
    pub const FINAL_THRESHOLD: f32 = 45.0;

    /// Speeds in tiles/second
    pub const PLAYER_START_SPEED: f32 = 6.0;
    pub const PLAYER_SPEED: f32 = 6.4;
    pub const GHOST_START_SPEED: f32 = 5.0;
    pub const GHOST_SPEED: f32 = 5.2;
    pub const GHOST_FRIGHTENED_SPEED: f32 = 4.1;
    pub const GHOST_EATEN_SPEED: f32 = 9.0;

    /// Points
    pub const PELLET_POINTS: u64 = 10;
    pub const POWER_PELLET_POINTS: u64 = 50;
    pub const GHOST_BASE_POINTS: u64 = 200;
    pub const FRUIT_EARLY_POINTS: u64 = 200;
    pub const FRUIT_LATE_POINTS: u64 = 500;

    /// Fruit lifetime in seconds
    pub const FRUIT_TTL: f32 = 12.0;
    /// Fruit lifetime drain per tick (one frame at 60 Hz, independent of dt)
    pub const FRUIT_TTL_DRAIN: f32 = 1.0 / 60.0;

    /// Pixel size of one tile in render space
    pub const TILE_SIZE: f32 = 24.0;
}
