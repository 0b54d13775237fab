//! Error types for chromaseg-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromaseg_core::Error),

    /// An operation requiring a source image was invoked before one was set
    #[error("no source image set")]
    MissingImage,

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
