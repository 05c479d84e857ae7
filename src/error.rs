//! Error types shared across the crate

/// Errors surfaced by maze generation, layout and configuration.
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    /// A grid dimension or unit length was zero, negative or not finite
    #[error("invalid dimension: {name} = {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// Config file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config or export (de)serialization failed
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type MazeResult<T> = Result<T, MazeError>;

/// Reject non-positive or non-finite lengths.
pub(crate) fn require_positive(name: &'static str, value: f32) -> MazeResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MazeError::InvalidDimension {
            name,
            value: value as f64,
        })
    }
}

/// Reject zero cell counts.
pub(crate) fn require_cells(name: &'static str, value: u32) -> MazeResult<u32> {
    if value == 0 {
        Err(MazeError::InvalidDimension { name, value: 0.0 })
    } else {
        Ok(value)
    }
}
