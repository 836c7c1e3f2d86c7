//! PixelBuffer - The RGB image container
//!
//! A `PixelBuffer` is a rectangular grid of RGB pixels with 8 bits per
//! channel. It is the input and output of every pixkit transform.
//!
//! # Pixel layout
//!
//! - One packed `u32` per pixel, row-major, no row padding
//! - Color order is RGBA (red in MSB); alpha is always 255
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning and is never mutated once
//! built. To produce pixel data, build a [`PixelBufferMut`] (directly, or via
//! [`PixelBuffer::try_into_mut`] / [`PixelBuffer::to_mut`]) and convert it
//! back with `Into<PixelBuffer>`.

mod access;

use crate::error::{Error, Result};
use crate::rgb;
use std::sync::Arc;

/// Internal buffer data
#[derive(Debug, Clone, PartialEq, Eq)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed pixels, `width * height` entries
    data: Vec<u32>,
}

impl BufferData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            data: vec![rgb::compose_rgb(0, 0, 0); size],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Immutable RGB pixel buffer
///
/// # Examples
///
/// ```
/// use pixkit_core::PixelBuffer;
///
/// let buf = PixelBuffer::filled(4, 4, 128, 64, 200).unwrap();
/// assert_eq!(buf.width(), 4);
/// assert_eq!(buf.get_rgb(3, 3), Some((128, 64, 200)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new all-black buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelBufferMut::new(width, height)?.into())
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, r: u8, g: u8, b: u8) -> Result<Self> {
        let mut buf = BufferData::new(width, height)?;
        buf.data.fill(rgb::compose_rgb(r, g, b));
        Ok(PixelBuffer {
            inner: Arc::new(buf),
        })
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> (u8, u8, u8),
    {
        let mut out = PixelBufferMut::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = f(x, y);
                out.set_rgb_unchecked(x, y, r, g, b);
            }
        }
        Ok(out.into())
    }

    /// Create a buffer from interleaved RGB bytes (3 bytes per pixel, row-major).
    ///
    /// This is the hand-off point for an external decoder.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::DimensionMismatch`] if `bytes.len() != width * height * 3`
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let mut buf = BufferData::new(width, height)?;
        let expected = buf.data.len() * 3;
        if bytes.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        for (dst, px) in buf.data.iter_mut().zip(bytes.chunks_exact(3)) {
            *dst = rgb::compose_rgb(px[0], px[1], px[2]);
        }
        Ok(PixelBuffer {
            inner: Arc::new(buf),
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.inner.width as u64 * self.inner.height as u64
    }

    /// Get raw access to the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get a row of packed pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Iterate over all pixels as `(r, g, b)` in row-major order.
    pub fn rgb_pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.inner.data.iter().map(|&p| rgb::extract_rgb(p))
    }

    /// Export as interleaved RGB bytes (3 bytes per pixel, row-major).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.inner.data.len() * 3);
        for (r, g, b) in self.rgb_pixels() {
            bytes.extend_from_slice(&[r, g, b]);
        }
        bytes
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get the number of strong references to the pixel data.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to take unique ownership of the pixel data for modification.
    ///
    /// Returns `Err(self)` if other clones still share the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Create a modifiable copy of this buffer.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Builder for a [`PixelBuffer`]
///
/// Owns its pixel data exclusively; convert into a `PixelBuffer` once all
/// pixels are written.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a new all-black builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: BufferData::new(width, height)?,
        })
    }

    /// Create an all-black builder with the same dimensions as `buf`.
    pub fn new_like(buf: &PixelBuffer) -> Self {
        let size = buf.inner.data.len();
        Self {
            inner: BufferData {
                width: buf.inner.width,
                height: buf.inner.height,
                data: vec![rgb::compose_rgb(0, 0, 0); size],
            },
        }
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get mutable access to the packed pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buf: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buf.inner),
        }
    }
}
