//! Game state and core simulation types
//!
//! `GameState` is the single aggregate root. It is exclusively owned by the
//! host and mutated only through `tick` and the control functions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::maze::{Direction, GHOST_COUNT, Maze, Tile};
use super::movement::Mover;
use super::scoring::ScoreLedger;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start signal
    Title,
    /// Active gameplay (the only phase that ticks)
    Playing,
    Paused,
    /// Round ended (caught, time up or cleared)
    GameOver,
}

/// Ghost behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostMode {
    Scatter,
    Chase,
    /// Wandering and capturable after a power pellet
    Frightened,
    /// Captured; pathing home at elevated speed
    Eaten,
}

/// One entry of the scatter/chase pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeStep {
    pub mode: GhostMode,
    /// Seconds
    pub duration: f32,
}

/// Fixed scatter/chase pattern. The last entry never expires.
pub const MODE_PATTERN: [ModeStep; 6] = [
    ModeStep { mode: GhostMode::Scatter, duration: 7.0 },
    ModeStep { mode: GhostMode::Chase, duration: 20.0 },
    ModeStep { mode: GhostMode::Scatter, duration: 7.0 },
    ModeStep { mode: GhostMode::Chase, duration: 20.0 },
    ModeStep { mode: GhostMode::Scatter, duration: 5.0 },
    ModeStep { mode: GhostMode::Chase, duration: f32::INFINITY },
];

/// Position within `MODE_PATTERN`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeSchedule {
    pub index: usize,
    /// Seconds spent in the current entry, accumulated in f64 so that whole
    /// numbers of 1/60 s steps land on the pattern boundaries
    pub timer: f64,
}

impl ModeSchedule {
    pub fn current(&self) -> ModeStep {
        MODE_PATTERN[self.index.min(MODE_PATTERN.len() - 1)]
    }

    /// Mode dictated by the pattern right now (scatter or chase)
    pub fn current_mode(&self) -> GhostMode {
        self.current().mode
    }

    /// Accumulate `dt`; returns true when the entry expired and the index advanced
    pub fn advance(&mut self, dt: f32) -> bool {
        let step = self.current();
        self.timer += f64::from(dt);
        if self.timer >= f64::from(step.duration) {
            self.timer = 0.0;
            self.index = (self.index + 1).min(MODE_PATTERN.len() - 1);
            return true;
        }
        false
    }
}

/// Display colors per ghost rank (0xRRGGBB)
pub const GHOST_COLORS: [u32; GHOST_COUNT] = [0xff4d4d, 0x64b5f6, 0xffb74d, 0xce93d8];

/// A ghost: a movable body plus behavior state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    pub id: u32,
    pub mover: Mover,
    pub color: u32,
    pub mode: GhostMode,
    /// Spawn tile; eaten ghosts return here
    pub home: Tile,
    /// Seconds left before an eaten ghost revives on its own
    pub respawn_timer: f32,
    /// Rank among the four ghosts (1-based), used as a scoring multiplier
    pub train_index: u32,
}

impl Ghost {
    pub fn new(id: u32, spawn: Tile) -> Self {
        Self {
            id,
            mover: Mover::new(spawn, Direction::Left, GHOST_START_SPEED),
            color: GHOST_COLORS[id as usize % GHOST_COUNT],
            mode: GhostMode::Scatter,
            home: spawn,
            respawn_timer: 0.0,
            train_index: id + 1,
        }
    }

    #[inline]
    pub fn tile(&self) -> Tile {
        self.mover.tile
    }
}

/// Transient bonus pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub tile: Tile,
    pub value: u64,
    /// Seconds left before it disappears
    pub ttl: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub maze: Maze,
    pub player: Mover,
    /// Exactly four, ordered by rank
    pub ghosts: Vec<Ghost>,
    /// Live pellets; only ever shrinks until the next reset
    pub pellets: HashSet<Tile>,
    pub power_pellets: HashSet<Tile>,
    pub fruit: Option<Fruit>,
    pub score: ScoreLedger,
    /// Configured round length in seconds
    pub round_seconds: f32,
    /// Seconds of play this round; f64 so 1/60 s steps do not drift over a round
    pub elapsed: f64,
    pub time_left: f32,
    /// Frightened countdown; zero when inactive
    pub frightened_timer: f32,
    pub schedule: ModeSchedule,
    pub speed_multiplier: f32,
    /// Human-readable status line
    pub message: String,
}

impl GameState {
    /// Title-phase state for a maze with the default round length
    pub fn new(maze: Maze) -> Self {
        Self::with_round_length(maze, ROUND_SECONDS)
    }

    pub fn with_round_length(maze: Maze, round_seconds: f32) -> Self {
        let pellets = maze.pellet_spawns().iter().copied().collect();
        let power_pellets = maze.power_pellets().iter().copied().collect();
        let player = Mover::new(maze.player_spawn(), Direction::Left, PLAYER_START_SPEED);
        let ghosts = maze
            .ghost_spawns()
            .iter()
            .take(GHOST_COUNT)
            .enumerate()
            .map(|(id, &spawn)| Ghost::new(id as u32, spawn))
            .collect();

        Self {
            phase: GamePhase::Title,
            maze,
            player,
            ghosts,
            pellets,
            power_pellets,
            fruit: None,
            score: ScoreLedger::new(),
            round_seconds,
            elapsed: 0.0,
            time_left: round_seconds,
            frightened_timer: 0.0,
            schedule: ModeSchedule::default(),
            speed_multiplier: 1.0,
            message: "Press Enter or Space to Start".to_string(),
        }
    }

    /// Fraction of the initial pellets still live, in [0, 1]
    pub fn pellet_ratio(&self) -> f32 {
        let total = self.maze.pellet_spawns().len();
        if total == 0 {
            return 0.0;
        }
        self.pellets.len() as f32 / total as f32
    }
}
