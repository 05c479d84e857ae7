//! Maze Escape - a top-down maze escape game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze generation, wall layout, win state)
//! - `game`: One play session tying the simulation pieces together
//! - `settings`: Persisted game configuration
//! - `web`: Browser host bindings (wasm32 only)

pub mod error;
pub mod game;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{MazeError, MazeResult};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default grid size (cells across, cells down)
    pub const CELLS_HORIZONTAL: u32 = 16;
    pub const CELLS_VERTICAL: u32 = 10;

    /// Thickness of an internal maze wall
    pub const WALL_THICKNESS: f32 = 5.0;
    /// Thickness of the outer boundary walls
    pub const BOUNDARY_THICKNESS: f32 = 2.0;

    /// Velocity change per directional key press
    pub const VELOCITY_STEP: f32 = 5.0;

    /// Vertical gravity once the maze is solved
    pub const WIN_GRAVITY_Y: f32 = 1.0;
}
