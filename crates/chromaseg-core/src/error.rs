//! Error types for chromaseg-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Chromaseg core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate out of bounds
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel buffer length does not match the declared dimensions
    #[error("pixel buffer length {actual} does not fill {width}x{height}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// Result type alias for chromaseg operations
pub type Result<T> = std::result::Result<T, Error>;
