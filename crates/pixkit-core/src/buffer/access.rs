//! Pixel access functions
//!
//! Read accessors on [`PixelBuffer`] and write accessors on
//! [`PixelBufferMut`]. The `_unchecked` variants panic on out-of-range
//! coordinates instead of returning an error.

use super::{PixelBuffer, PixelBufferMut};
use crate::error::{Error, Result};
use crate::rgb;

impl PixelBuffer {
    /// Get the packed pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get the packed pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; an `x >= width` reads into the next row.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(rgb::extract_rgb)
    }

    /// Get RGB values without bounds checking.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        rgb::extract_rgb(self.get_pixel_unchecked(x, y))
    }

    /// Get RGB values at (x, y) normalized to [0.0, 1.0].
    pub fn get_normalized(&self, x: u32, y: u32) -> Option<(f64, f64, f64)> {
        self.get_rgb(x, y).map(|(r, g, b)| {
            (
                rgb::to_normalized(r),
                rgb::to_normalized(g),
                rgb::to_normalized(b),
            )
        })
    }
}

impl PixelBufferMut {
    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(rgb::extract_rgb(self.inner.data[self.inner.index(x, y)]))
    }

    /// Set RGB values at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set RGB values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = rgb::compose_rgb(r, g, b);
    }

    /// Set a pixel from normalized channel values.
    ///
    /// Each value is clamped to [0.0, 1.0] and rounded to the nearest level.
    pub fn set_normalized(&mut self, x: u32, y: u32, r: f64, g: f64, b: f64) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_rgb_unchecked(
            x,
            y,
            rgb::from_normalized(r),
            rgb::from_normalized(g),
            rgb::from_normalized(b),
        );
        Ok(())
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        Ok(())
    }
}
