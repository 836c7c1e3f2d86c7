//! pixkit - Deterministic raster transforms
//!
//! Pure transforms over in-memory RGB buffers. Every operation reads a
//! [`PixelBuffer`] and returns a new one of the same dimensions.
//!
//! # Overview
//!
//! - Point maps: invert, greyscale, lookup tables ([`color`], [`filter`])
//! - Convolution with range normalization over a fixed kernel catalog
//! - Histograms of the red, green, blue and grey-level series
//! - Tone tables: gamma, contrast stretch, cumulative equalization
//! - Brightness equalization in HSB space
//!
//! # Example
//!
//! ```
//! use pixkit::{KernelKind, PixelBuffer, apply_kernel_kind, invert};
//!
//! let buf = PixelBuffer::filled(8, 8, 128, 64, 200).unwrap();
//! let inv = invert(&buf).unwrap();
//! assert_eq!(inv.get_rgb(0, 0), Some((127, 191, 55)));
//!
//! let edges = apply_kernel_kind(&buf, KernelKind::Laplacian).unwrap();
//! assert_eq!(edges.dimensions(), (8, 8));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixkit_color as color;
pub use pixkit_filter as filter;

// Frequently used operations
pub use pixkit_color::{invert, to_greyscale};
pub use pixkit_filter::{
    ContrastPoint, Kernel, KernelKind, LookupTable, apply_kernel, apply_kernel_kind,
    apply_lookup_table, contrast_table, equalize_brightness, equalize_grey, gamma_table,
};
