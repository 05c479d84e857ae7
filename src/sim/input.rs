//! Directional commands
//!
//! Each key-down nudges the ball's velocity by a fixed step along one axis.
//! Screen coordinates: +y points down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::BallActor;

/// A directional key-down command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in screen space
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    /// Legacy `keyCode` values: WASD and the arrow keys
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            87 | 38 => Some(Direction::Up),
            68 | 39 => Some(Direction::Right),
            83 | 40 => Some(Direction::Down),
            65 | 37 => Some(Direction::Left),
            _ => None,
        }
    }

    /// `KeyboardEvent.key` values
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Up),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            "s" | "S" | "ArrowDown" => Some(Direction::Down),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            _ => None,
        }
    }
}

impl BallActor {
    /// Add `step` along the command's axis. The other axis is untouched; no clamping.
    pub fn apply_command(&mut self, dir: Direction, step: f32) {
        self.vel += dir.unit() * step;
    }
}
