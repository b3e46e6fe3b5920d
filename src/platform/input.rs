//! Input adapter contract
//!
//! Device glue writes key presses and gamepad axes into `InputState`; the
//! host reads it once per frame.

use crate::sim::{Controls, Direction};

/// Gamepad stick dead zone
pub const AXIS_DEAD_ZONE: f32 = 0.4;

/// Latched keyboard state between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last pressed direction key, held until a tick applies it
    pub direction: Direction,
    pub controls: Controls,
}

impl InputState {
    /// Record a key press by its layout-independent code (`"ArrowUp"`, `"KeyW"`, ...)
    pub fn key_down(&mut self, code: &str) {
        if let Some(dir) = direction_from_key(code) {
            self.direction = dir;
        }
        match code {
            "Space" | "Enter" => self.controls.start = true,
            "KeyP" => self.controls.pause = true,
            "KeyR" => self.controls.restart = true,
            _ => {}
        }
    }

    /// Direction intent for this frame: keyboard first, gamepad as fallback
    pub fn intent(&self, gamepad: Direction) -> Direction {
        if self.direction != Direction::None {
            self.direction
        } else {
            gamepad
        }
    }

    /// Drop the latched keyboard direction once it has been applied
    pub fn consume_direction(&mut self) {
        self.direction = Direction::None;
    }
}

pub fn direction_from_key(code: &str) -> Option<Direction> {
    match code {
        "ArrowUp" | "KeyW" => Some(Direction::Up),
        "ArrowDown" | "KeyS" => Some(Direction::Down),
        "ArrowLeft" | "KeyA" => Some(Direction::Left),
        "ArrowRight" | "KeyD" => Some(Direction::Right),
        _ => None,
    }
}

/// Map a stick position to a direction; the dominant axis wins
pub fn direction_from_axes(x: f32, y: f32) -> Direction {
    if x.abs() > y.abs() && x.abs() > AXIS_DEAD_ZONE {
        return if x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };
    }
    if y.abs() > AXIS_DEAD_ZONE {
        return if y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
    }
    Direction::None
}
