//! Breadth-first pathfinding over the maze graph
//!
//! Edges are the legal moves of the movement engine, tunnels included.
//! Neighbors expand in a fixed order (up, left, down, right) so ties always
//! break the same way.

use std::collections::VecDeque;

use super::maze::{Direction, Maze, Tile};
use super::movement::can_move;

/// First direction to take from `start` along a shortest path to `target`.
///
/// Returns `Direction::None` when already there or when no route exists;
/// callers treat that as "hold position".
pub fn first_step_toward(maze: &Maze, start: Tile, target: Tile) -> Direction {
    let start = maze.wrap(start);
    let target = maze.wrap(target);
    if start == target {
        return Direction::None;
    }

    let Some(start_index) = cell_index(maze, start) else {
        return Direction::None;
    };
    let cell_count = (maze.width() as usize) * (maze.height() as usize);
    let mut came_from: Vec<Option<(Tile, Direction)>> = vec![None; cell_count];
    let mut seen = vec![false; cell_count];
    seen[start_index] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for dir in Direction::SEARCH_ORDER {
            if !can_move(maze, current, dir) {
                continue;
            }
            let next = maze.neighbor(current, dir);
            let Some(index) = cell_index(maze, next) else {
                continue;
            };
            if seen[index] {
                continue;
            }
            seen[index] = true;
            came_from[index] = Some((current, dir));
            if next == target {
                return unwind_first_direction(maze, &came_from, start, next);
            }
            queue.push_back(next);
        }
    }

    Direction::None
}

fn unwind_first_direction(
    maze: &Maze,
    came_from: &[Option<(Tile, Direction)>],
    start: Tile,
    end: Tile,
) -> Direction {
    let mut cursor = end;
    while let Some((from, dir)) = cell_index(maze, cursor).and_then(|i| came_from[i]) {
        if from == start {
            return dir;
        }
        cursor = from;
    }
    Direction::None
}

fn cell_index(maze: &Maze, tile: Tile) -> Option<usize> {
    if tile.x < 0 || tile.y < 0 || tile.x >= maze.width() || tile.y >= maze.height() {
        return None;
    }
    usize::try_from(tile.y * maze.width() + tile.x).ok()
}
