//! Error types for pixkit-core
//!
//! Provides a unified error type for buffer construction and access.
//! Transforms built on top of the core wrap this error in their own
//! crate-level error enums.

use thiserror::Error;

/// pixkit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Zero width or zero height
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw data length does not match the requested dimensions
    #[error("dimension mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for pixkit-core operations
pub type Result<T> = std::result::Result<T, Error>;
