//! Frame snapshot builder

use glam::Vec2;

use super::vertex::{Sprite, SpriteKind, colors, rgb};
use crate::consts::TILE_SIZE;
use crate::sim::{GamePhase, GameState, GhostMode, Maze, Mover, Tile, TileKind, can_move};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub width_px: f32,
    pub height_px: f32,
    pub background: [f32; 4],
    /// Back to front: walls, pellets, fruit, player, ghosts
    pub sprites: Vec<Sprite>,
    /// Score, combo and clock lines
    pub hud: Vec<String>,
    /// Status message, shown only outside of play
    pub banner: Option<String>,
    /// Sub-step interpolation fraction in [0, 1)
    pub alpha: f32,
}

impl FrameView {
    /// Build a snapshot. `step` is the fixed tick length `alpha` refers to.
    pub fn capture(state: &GameState, alpha: f32, step: f32) -> Self {
        let maze = &state.maze;
        let mut sprites = Vec::new();

        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let tile = Tile::new(x, y);
                if maze.classify(tile) == TileKind::Wall {
                    let c = tile_center(tile);
                    sprites.push(Sprite::new(
                        SpriteKind::Wall,
                        c.x,
                        c.y,
                        TILE_SIZE / 2.0,
                        rgb(colors::WALL),
                    ));
                }
            }
        }

        // Iterate spawn order rather than the sets for a stable draw order
        for &tile in maze.pellet_spawns() {
            if state.pellets.contains(&tile) {
                let c = tile_center(tile);
                sprites.push(Sprite::new(SpriteKind::Pellet, c.x, c.y, 3.0, rgb(colors::PELLET)));
            }
        }
        for &tile in maze.power_pellets() {
            if state.power_pellets.contains(&tile) {
                let c = tile_center(tile);
                sprites.push(Sprite::new(
                    SpriteKind::PowerPellet,
                    c.x,
                    c.y,
                    6.0,
                    rgb(colors::POWER_PELLET),
                ));
            }
        }

        if let Some(fruit) = &state.fruit {
            let c = tile_center(fruit.tile);
            sprites.push(Sprite::new(SpriteKind::Fruit, c.x, c.y, 8.0, rgb(colors::FRUIT)));
        }

        let extrapolate = state.phase == GamePhase::Playing;
        let p = actor_center(maze, &state.player, alpha, step, extrapolate);
        sprites.push(Sprite::new(SpriteKind::Player, p.x, p.y, 10.0, rgb(colors::PLAYER)));

        for ghost in &state.ghosts {
            let g = actor_center(maze, &ghost.mover, alpha, step, extrapolate);
            let color = if ghost.mode == GhostMode::Frightened {
                colors::FRIGHTENED
            } else {
                ghost.color
            };
            sprites.push(Sprite::new(SpriteKind::Ghost, g.x, g.y, 9.0, rgb(color)));
        }

        let hud = vec![
            format!("Score {}", state.score.score),
            format!("Combo {}", state.score.combo_chain),
            format!("Time {:.1}", state.time_left),
        ];
        let banner = (state.phase != GamePhase::Playing).then(|| state.message.clone());

        Self {
            width_px: maze.width() as f32 * TILE_SIZE,
            height_px: maze.height() as f32 * TILE_SIZE,
            background: rgb(colors::BACKGROUND),
            sprites,
            hud,
            banner,
            alpha,
        }
    }

    /// Raw bytes of the sprite list, ready for an instance buffer upload
    pub fn sprite_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sprites)
    }
}

/// Pixel center of a tile
pub fn tile_center(tile: Tile) -> Vec2 {
    tile.as_vec2() * TILE_SIZE + Vec2::splat(TILE_SIZE / 2.0)
}

/// Tile center offset along the facing by the fractional progress, plus the
/// part of the next step already elapsed (`alpha`) when the way is open
fn actor_center(maze: &Maze, mover: &Mover, alpha: f32, step: f32, extrapolate: bool) -> Vec2 {
    let mut progress = mover.move_progress;
    if extrapolate && can_move(maze, mover.tile, mover.dir) {
        progress = (progress + mover.speed * step * alpha).min(1.0);
    }
    tile_center(mover.tile) + mover.dir.delta().as_vec2() * progress * TILE_SIZE
}
