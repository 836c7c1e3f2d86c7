//! Error types for pixkit-filter
//!
//! Precondition violations (malformed kernels, lookup tables of the wrong
//! length, degenerate contrast points) are reported as typed errors.
//! Arithmetic edge cases such as a flat convolution response are resolved
//! deterministically and never surface here.

use thiserror::Error;

/// Errors that can occur during filtering and lookup-table operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixkit_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Lookup table does not have exactly 256 entries
    #[error("invalid lookup table: expected 256 entries, got {len}")]
    InvalidLookupTable {
        /// Actual number of entries
        len: usize,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
