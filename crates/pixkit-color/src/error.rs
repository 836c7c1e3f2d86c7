//! Error types for pixkit-color

use thiserror::Error;

/// Errors that can occur during per-pixel color transforms
///
/// A valid `PixelBuffer` is never empty, so the point transforms in this
/// crate currently always succeed. They still return [`ColorResult`] so that
/// every transform in `pixkit-color` and `pixkit-filter` has the same shape.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixkit_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
