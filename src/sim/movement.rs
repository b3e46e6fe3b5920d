//! Tile-discrete movement with sub-tile interpolation
//!
//! Logical position is always a whole tile. `move_progress` in [0, 1) is the
//! fraction travelled toward the next tile along `dir` and exists only so the
//! renderer can draw smooth motion.

use serde::{Deserialize, Serialize};

use super::maze::{Direction, Maze, Tile, TileKind};

/// A movable agent (player or ghost body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub tile: Tile,
    /// Current facing
    pub dir: Direction,
    /// Buffered turn, committed as soon as it becomes legal
    pub next_dir: Direction,
    pub move_progress: f32,
    /// Tiles per second
    pub speed: f32,
}

impl Mover {
    pub fn new(tile: Tile, dir: Direction, speed: f32) -> Self {
        Self {
            tile,
            dir,
            next_dir: dir,
            move_progress: 0.0,
            speed,
        }
    }
}

/// Whether one step from `tile` along `dir` lands on a non-wall tile
pub fn can_move(maze: &Maze, tile: Tile, dir: Direction) -> bool {
    if dir == Direction::None {
        return false;
    }
    maze.classify(maze.neighbor(tile, dir)) != TileKind::Wall
}

/// Commit the buffered direction if turning onto it is legal from the current tile
pub fn try_buffered_turn(mover: &mut Mover, maze: &Maze) {
    if mover.next_dir == Direction::None {
        return;
    }
    if can_move(maze, mover.tile, mover.next_dir) {
        mover.dir = mover.next_dir;
    }
}

/// Advance an agent by `dt` seconds
pub fn advance(mover: &mut Mover, maze: &Maze, dt: f32) {
    // Turn before moving so corners feel responsive
    try_buffered_turn(mover, maze);
    if !can_move(maze, mover.tile, mover.dir) {
        mover.move_progress = 0.0;
        return;
    }

    mover.move_progress += mover.speed * dt;
    while mover.move_progress >= 1.0 {
        mover.move_progress -= 1.0;
        mover.tile = maze.neighbor(mover.tile, mover.dir);
        try_buffered_turn(mover, maze);
        if !can_move(maze, mover.tile, mover.dir) {
            // Stop exactly on the tile boundary
            mover.move_progress = 0.0;
            break;
        }
    }
}
