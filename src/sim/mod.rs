//! Deterministic simulation module
//!
//! All game logic lives here. This module must be pure and deterministic:
//! - Seeded or injected randomness only
//! - Stable ordering of generated bodies
//! - No rendering or platform dependencies

pub mod body;
pub mod input;
pub mod layout;
pub mod maze;
pub mod rng;
pub mod state;

pub use body::{BallActor, BarrierSegment, BodyLabel, GoalRegion};
pub use input::Direction;
pub use layout::{Layout, layout, layout_with_thickness};
pub use maze::{Cell, Grid, Maze, Move, generate};
pub use rng::{RandomSource, RngState, shuffle};
pub use state::{GamePhase, GameState, StateChange, World, is_goal_contact};
