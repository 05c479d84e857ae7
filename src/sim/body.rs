//! Bodies handed to the physics host
//!
//! These are descriptions only: the host engine owns the actual rigid bodies
//! and reports back collisions by label.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Identifies what a body is when the physics host reports a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyLabel {
    /// Internal maze wall, released on win
    Wall,
    /// Outer rectangle, always static
    Boundary,
    Goal,
    Ball,
}

impl BodyLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyLabel::Wall => "wall",
            BodyLabel::Boundary => "boundary",
            BodyLabel::Goal => "goal",
            BodyLabel::Ball => "ball",
        }
    }

    /// Fill colour for the host renderer
    pub fn fill_style(&self) -> &'static str {
        match self {
            BodyLabel::Wall => "#f32260",
            BodyLabel::Boundary => "#f32260",
            BodyLabel::Goal => "#45f4e2",
            BodyLabel::Ball => "#f29867",
        }
    }
}

impl fmt::Display for BodyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyLabel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wall" => Ok(BodyLabel::Wall),
            "boundary" => Ok(BodyLabel::Boundary),
            "goal" => Ok(BodyLabel::Goal),
            "ball" => Ok(BodyLabel::Ball),
            _ => Err(()),
        }
    }
}

/// A rectangular wall body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierSegment {
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
    pub label: BodyLabel,
    pub is_static: bool,
}

impl BarrierSegment {
    pub fn wall(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            label: BodyLabel::Wall,
            is_static: true,
        }
    }

    pub fn boundary(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            size,
            label: BodyLabel::Boundary,
            is_static: true,
        }
    }
}

/// The square the ball must reach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRegion {
    pub center: Vec2,
    /// Side length
    pub size: f32,
    pub label: BodyLabel,
}

impl GoalRegion {
    pub fn new(center: Vec2, size: f32) -> Self {
        Self {
            center,
            size,
            label: BodyLabel::Goal,
        }
    }
}

/// The player-controlled ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallActor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub label: BodyLabel,
}

impl BallActor {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            label: BodyLabel::Ball,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strings() {
        for label in [BodyLabel::Wall, BodyLabel::Boundary, BodyLabel::Goal, BodyLabel::Ball] {
            assert_eq!(label.as_str().parse::<BodyLabel>(), Ok(label));
            assert_eq!(label.to_string(), label.as_str());
        }
        assert!("Rectangle Body".parse::<BodyLabel>().is_err());
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&BodyLabel::Goal).unwrap();
        assert_eq!(json, "\"goal\"");
    }
}
