//! pixkit-filter - Convolution and tone mapping
//!
//! This crate provides the operations that go beyond a fixed per-pixel map:
//!
//! - Named convolution kernels ([`KernelKind`]) and custom [`Kernel`]s
//! - Two-pass convolution with a black border and range normalization
//! - Lookup table generators: gamma, contrast stretch, equalization
//! - Lookup table application, grey equalization and HSB brightness
//!   equalization

pub mod convolve;
mod error;
pub mod enhance;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, KernelKind};

// Re-export commonly used functions
pub use convolve::{ConvolveOptions, apply_kernel, apply_kernel_kind, apply_kernel_with};
pub use enhance::{
    ContrastPoint, GAMMA_MAX, GAMMA_MIN, LookupTable, apply_lookup_table, contrast_table,
    equalization_table, equalize_brightness, equalize_grey, gamma_table, grey_equalization_table,
};
