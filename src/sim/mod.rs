//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock or OS randomness (frightened steering derives from elapsed time)
//! - Stable iteration order (ghosts by rank)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod maze;
pub mod movement;
pub mod pathfinding;
pub mod scoring;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use maze::{CLASSIC_LAYOUT, Direction, Maze, MazeError, Tile, TileKind, step};
pub use movement::{Mover, advance, can_move, try_buffered_turn};
pub use pathfinding::first_step_toward;
pub use scoring::ScoreLedger;
pub use state::{
    Fruit, GamePhase, GameState, Ghost, GhostMode, MODE_PATTERN, ModeSchedule, ModeStep,
};
pub use tick::{Controls, TickInput, apply_controls, reset_round, set_player_direction, tick};
