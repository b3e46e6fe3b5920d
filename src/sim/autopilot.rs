//! Idle/demo mode - a seeded random walker that plays the player
//!
//! Decides only when the player reaches a new tile, and only when it is
//! stalled against a wall or standing on a junction. Seeded, so a demo run
//! with the same seed replays identically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::maze::{Direction, Tile};
use super::movement::can_move;
use super::state::GameState;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    last_tile: Option<Tile>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_tile: None,
        }
    }

    /// Direction intent for this frame (`None` = keep going)
    pub fn steer(&mut self, state: &GameState) -> Direction {
        let player = &state.player;
        let stalled = !can_move(&state.maze, player.tile, player.dir);
        if !stalled && self.last_tile == Some(player.tile) {
            return Direction::None;
        }
        self.last_tile = Some(player.tile);

        let exits: Vec<Direction> = Direction::SEARCH_ORDER
            .into_iter()
            .filter(|&dir| can_move(&state.maze, player.tile, dir))
            .collect();
        if exits.is_empty() || (!stalled && exits.len() <= 2) {
            return Direction::None;
        }

        // Avoid doubling back unless it is the only way out
        let forward: Vec<Direction> = exits
            .iter()
            .copied()
            .filter(|&dir| dir != player.dir.opposite())
            .collect();
        let pool = if forward.is_empty() { &exits } else { &forward };
        pool[self.rng.random_range(0..pool.len())]
    }
}
