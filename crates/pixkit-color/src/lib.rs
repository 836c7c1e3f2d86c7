//! pixkit-color - Per-pixel color transforms
//!
//! Every output pixel depends only on the corresponding input pixel, so
//! iteration order never affects the result:
//!
//! - [`invert`] - Channel inversion (`255 - c`)
//! - [`to_greyscale`] - Truncating three-channel average
//! - [`map_pixels`] - Generic per-pixel map used by the transforms above
//! - [`is_greyscale`] - Detect buffers whose pixels all have `r == g == b`

pub mod error;
pub mod point;

// Re-export core types
pub use pixkit_core;

pub use error::{ColorError, ColorResult};
pub use point::{invert, is_greyscale, map_pixels, to_greyscale};
