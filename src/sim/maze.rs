//! Maze model: static grid, tile classification and tunnel wrapping
//!
//! The maze is parsed once from a fixed textual layout and never mutated.
//! Every coordinate lookup wraps modulo the grid dimensions first, so a tile
//! at x = -1 resolves to x = width - 1. That is what makes the tunnel row
//! continuous.

use std::error::Error;
use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer tile coordinate (x = column, y = row)
pub type Tile = IVec2;

/// The built-in layout.
///
/// `#` wall, `.` pellet, `o` power pellet, `T` tunnel exit, `P` player spawn,
/// `G` ghost spawn, space = empty path.
pub const CLASSIC_LAYOUT: [&str; 20] = [
    "###################",
    "#........#........#",
    "#.###.##.#.##.###.#",
    "#o###.##.#.##.###o#",
    "#.................#",
    "#.###.#.###.#.###.#",
    "#.....#...#.#.....#",
    "#####.### # ###.###",
    "    #.#     #.#    ",
    "#####.# ## ##.#.###",
    "T....   GGGG  ....T",
    "#####.# #####.#.###",
    "    #.#       #.#  ",
    "#####.# ##### #.###",
    "#........#........#",
    "#.###.##.#.##.###.#",
    "#o..#........#..o.#",
    "###.#.#.###.#.#.###",
    "#.....#..P..#.....#",
    "###################",
];

/// Number of ghosts spawned per round
pub const GHOST_COUNT: usize = 4;

/// Facing / intent direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor expansion order used by pathfinding and frightened steering
    pub const SEARCH_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// Unit offset for one step in this direction (y grows downward)
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::None => IVec2::ZERO,
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Unwrapped neighbor of `tile` one step along `dir`
#[inline]
pub fn step(tile: Tile, dir: Direction) -> Tile {
    tile + dir.delta()
}

/// Tile classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Path,
    Tunnel,
}

/// Reasons a textual layout is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or a zero-width first row
    Empty,
    /// A row whose length differs from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the tile alphabet
    UnknownGlyph { x: usize, y: usize, glyph: char },
    MissingPlayerSpawn,
    TooFewGhostSpawns { found: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze layout is empty"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze row {row} has {found} tiles (expected {expected})"
            ),
            Self::UnknownGlyph { x, y, glyph } => {
                write!(f, "unknown maze glyph {glyph:?} at ({x}, {y})")
            }
            Self::MissingPlayerSpawn => write!(f, "maze layout has no player spawn"),
            Self::TooFewGhostSpawns { found } => write!(
                f,
                "maze layout has {found} ghost spawns (need at least {GHOST_COUNT})"
            ),
        }
    }
}

impl Error for MazeError {}

/// Immutable maze grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    width: i32,
    height: i32,
    /// Row-major classification, `width * height` entries
    tiles: Vec<TileKind>,
    /// Every pellet spawn, power pellets included
    pellet_spawns: Vec<Tile>,
    power_pellets: Vec<Tile>,
    player_spawn: Tile,
    ghost_spawns: Vec<Tile>,
}

impl Maze {
    /// Parse the built-in layout
    pub fn classic() -> Result<Self, MazeError> {
        Self::parse(&CLASSIC_LAYOUT)
    }

    /// Parse a layout of equal-width text rows
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let expected = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if expected == 0 {
            return Err(MazeError::Empty);
        }

        let mut tiles = Vec::with_capacity(expected * rows.len());
        let mut pellet_spawns = Vec::new();
        let mut power_pellets = Vec::new();
        let mut player_spawn = None;
        let mut ghost_spawns = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(MazeError::RaggedRow {
                    row: y,
                    expected,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let tile = IVec2::new(x as i32, y as i32);
                let kind = match glyph {
                    '#' => TileKind::Wall,
                    'T' => TileKind::Tunnel,
                    '.' | 'o' | 'P' | 'G' | ' ' => TileKind::Path,
                    _ => return Err(MazeError::UnknownGlyph { x, y, glyph }),
                };
                tiles.push(kind);

                match glyph {
                    '.' => pellet_spawns.push(tile),
                    'o' => {
                        pellet_spawns.push(tile);
                        power_pellets.push(tile);
                    }
                    'P' => player_spawn = Some(tile),
                    'G' => ghost_spawns.push(tile),
                    _ => {}
                }
            }
        }

        let player_spawn = player_spawn.ok_or(MazeError::MissingPlayerSpawn)?;
        if ghost_spawns.len() < GHOST_COUNT {
            return Err(MazeError::TooFewGhostSpawns {
                found: ghost_spawns.len(),
            });
        }

        Ok(Self {
            width: expected as i32,
            height: rows.len() as i32,
            tiles,
            pellet_spawns,
            power_pellets,
            player_spawn,
            ghost_spawns,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pellet_spawns(&self) -> &[Tile] {
        &self.pellet_spawns
    }

    pub fn power_pellets(&self) -> &[Tile] {
        &self.power_pellets
    }

    pub fn player_spawn(&self) -> Tile {
        self.player_spawn
    }

    pub fn ghost_spawns(&self) -> &[Tile] {
        &self.ghost_spawns
    }

    /// Wrap a coordinate into `[0, width) x [0, height)`, per axis
    pub fn wrap(&self, tile: Tile) -> Tile {
        if self.width <= 0 || self.height <= 0 {
            return tile;
        }
        IVec2::new(tile.x.rem_euclid(self.width), tile.y.rem_euclid(self.height))
    }

    /// Classification of a (wrapped) tile. Anything unaddressable reads as wall.
    pub fn classify(&self, tile: Tile) -> TileKind {
        let wrapped = self.wrap(tile);
        self.index(wrapped)
            .and_then(|i| self.tiles.get(i).copied())
            .unwrap_or(TileKind::Wall)
    }

    /// Wrapped neighbor one step along `dir`
    #[inline]
    pub fn neighbor(&self, tile: Tile, dir: Direction) -> Tile {
        self.wrap(step(tile, dir))
    }

    /// Scatter corners, one per ghost rank
    pub fn corners(&self) -> [Tile; GHOST_COUNT] {
        [
            IVec2::new(1, 1),
            IVec2::new(self.width - 2, 1),
            IVec2::new(1, self.height - 2),
            IVec2::new(self.width - 2, self.height - 2),
        ]
    }

    fn index(&self, tile: Tile) -> Option<usize> {
        if tile.x < 0 || tile.y < 0 || tile.x >= self.width || tile.y >= self.height {
            return None;
        }
        usize::try_from(tile.y * self.width + tile.x).ok()
    }
}
