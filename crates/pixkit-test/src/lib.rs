//! pixkit-test - Regression test framework for pixkit
//!
//! This crate provides a small regression harness in the style of
//! Leptonica's `regutils.c`, supporting two modes:
//!
//! - **Compare**: Check computed values and buffers against expectations (default)
//! - **Display**: Additionally write PNG snapshots of buffers to `tests/regout`
//!
//! Inputs are synthesised in memory by the `make_*` builders, so no decoder
//! or test image files are needed.
//!
//! # Usage
//!
//! ```ignore
//! use pixkit_test::{RegParams, make_uniform};
//!
//! let mut rp = RegParams::new("invert");
//! let buf = make_uniform(128, 64, 200, 4, 4);
//! rp.compare_values(16.0, buf.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Filter for library log output (via `env_logger`)

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixkit_core::PixelBuffer;

/// Create a buffer filled with a single color.
///
/// # Panics
///
/// Panics if `w` or `h` is 0.
pub fn make_uniform(r: u8, g: u8, b: u8, w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::filled(w, h, r, g, b).expect("uniform test buffer")
}

/// Create a grey gradient rising from 0 at the left edge towards 255.
///
/// # Panics
///
/// Panics if `w` or `h` is 0.
pub fn make_gradient(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn(w, h, |x, _| {
        let v = ((x as f32 / w as f32) * 255.0) as u8;
        (v, v, v)
    })
    .expect("gradient test buffer")
}

/// Create a 3-color buffer: red (left), green (middle), blue (right).
///
/// # Panics
///
/// Panics if `w` or `h` is 0.
pub fn make_tricolor(w: u32, h: u32) -> PixelBuffer {
    let third = w / 3;
    PixelBuffer::from_fn(w, h, |x, _| {
        if x < third {
            (255, 0, 0)
        } else if x < 2 * third {
            (0, 255, 0)
        } else {
            (0, 0, 255)
        }
    })
    .expect("tricolor test buffer")
}

/// Create a black/white checkerboard with square cells of `cell` pixels.
///
/// # Panics
///
/// Panics if `w`, `h` or `cell` is 0.
pub fn make_checkerboard(w: u32, h: u32, cell: u32) -> PixelBuffer {
    PixelBuffer::from_fn(w, h, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            (0, 0, 0)
        } else {
            (255, 255, 255)
        }
    })
    .expect("checkerboard test buffer")
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixkit-test is at crates/pixkit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
