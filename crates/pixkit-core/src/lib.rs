//! pixkit-core - Pixel buffers and histograms
//!
//! This crate provides the data model shared by every pixkit transform:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - RGB image container (immutable / builder)
//! - [`HistogramData`] - Per-channel and grey-level frequency counts
//! - [`rgb`] - Packed pixel helpers and RGB <-> HSB conversion
//!
//! Transforms never mutate a `PixelBuffer`; they read it through the
//! accessors and build a fresh one through `PixelBufferMut`.

pub mod buffer;
pub mod error;
pub mod histogram;

pub use buffer::{PixelBuffer, PixelBufferMut};
pub use error::{Error, Result};
pub use histogram::{HistogramChannel, HistogramData, brightness_histogram, compute_histogram};

/// Number of intensity levels per channel.
pub const LEVELS: usize = 256;

/// Largest channel value.
pub const MAX_LEVEL: u8 = 255;

/// Packed pixel helpers and HSB conversion.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB). Alpha is
/// always written as 255 and ignored on read.
pub mod rgb {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a packed RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT) | 0xff
    }

    /// Extract RGB values from a packed pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Channel level as a normalized value in [0.0, 1.0].
    #[inline]
    pub fn to_normalized(level: u8) -> f64 {
        level as f64 / 255.0
    }

    /// Normalized value to the nearest channel level.
    ///
    /// Values outside [0.0, 1.0] are clamped; NaN maps to 0.
    #[inline]
    pub fn from_normalized(value: f64) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Truncating average of the three channels.
    #[inline]
    pub fn grey_level(r: u8, g: u8, b: u8) -> u8 {
        ((r as u32 + g as u32 + b as u32) / 3) as u8
    }

    /// HSB (hue, saturation, brightness) color values.
    ///
    /// - `hue`: degrees in [0.0, 360.0)
    /// - `saturation`: [0.0, 1.0]
    /// - `brightness`: [0.0, 1.0], the largest normalized channel
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Hsb {
        pub hue: f64,
        pub saturation: f64,
        pub brightness: f64,
    }

    impl Hsb {
        /// Create a new HSB color
        pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
            Self {
                hue,
                saturation,
                brightness,
            }
        }

        /// Brightness as an integer level in 0..=255.
        #[inline]
        pub fn brightness_level(&self) -> u8 {
            from_normalized(self.brightness)
        }
    }

    /// Convert RGB to HSB.
    pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> Hsb {
        let ri = r as i32;
        let gi = g as i32;
        let bi = b as i32;

        let max = ri.max(gi).max(bi);
        let min = ri.min(gi).min(bi);
        let delta = max - min;

        let brightness = max as f64 / 255.0;
        if delta == 0 {
            return Hsb::new(0.0, 0.0, brightness);
        }

        let saturation = delta as f64 / max as f64;
        let delta = delta as f64;
        let sector = if ri == max {
            (gi - bi) as f64 / delta
        } else if gi == max {
            2.0 + (bi - ri) as f64 / delta
        } else {
            4.0 + (ri - gi) as f64 / delta
        };

        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsb::new(hue, saturation, brightness)
    }

    /// Convert HSB to RGB.
    ///
    /// Saturation and brightness are clamped to [0.0, 1.0]; hue wraps.
    pub fn hsb_to_rgb(hsb: Hsb) -> (u8, u8, u8) {
        let s = hsb.saturation.clamp(0.0, 1.0);
        let v = hsb.brightness.clamp(0.0, 1.0);

        if s == 0.0 {
            let level = from_normalized(v);
            return (level, level, level);
        }

        let h = hsb.hue.rem_euclid(360.0) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        (from_normalized(r), from_normalized(g), from_normalized(b))
    }

}
