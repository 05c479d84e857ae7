//! Game settings
//!
//! Persisted in LocalStorage on the web and as a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{MazeResult, require_cells, require_positive};

/// Maze and control configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cells across the viewport
    pub cells_horizontal: u32,
    /// Cells down the viewport
    pub cells_vertical: u32,
    /// Fixed maze seed (None = new maze every run)
    pub seed: Option<u64>,
    /// Thickness of internal walls
    pub wall_thickness: f32,
    /// Velocity change per key press
    pub velocity_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cells_horizontal: CELLS_HORIZONTAL,
            cells_vertical: CELLS_VERTICAL,
            seed: None,
            wall_thickness: WALL_THICKNESS,
            velocity_step: VELOCITY_STEP,
        }
    }
}

impl Settings {
    /// Check every dimension before any maze is built
    pub fn validate(&self) -> MazeResult<()> {
        require_cells("cells_horizontal", self.cells_horizontal)?;
        require_cells("cells_vertical", self.cells_vertical)?;
        require_positive("wall_thickness", self.wall_thickness)?;
        if !self.velocity_step.is_finite() {
            return Err(crate::MazeError::InvalidDimension {
                name: "velocity_step",
                value: self.velocity_step as f64,
            });
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> MazeResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> MazeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "maze_escape_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> MazeResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file (native only). Invalid settings are never written.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> MazeResult<()> {
        self.validate()?;
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
