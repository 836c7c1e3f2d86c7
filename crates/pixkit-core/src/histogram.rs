//! Histogram generation for pixel buffers
//!
//! Counts channel-value distributions in a single pass over the buffer.
//! Bin counts are commutative, so the result does not depend on the scan
//! order.

use crate::buffer::PixelBuffer;
use crate::{LEVELS, rgb};
use log::debug;
use std::fmt;

/// Selects one of the four series held by a [`HistogramData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistogramChannel {
    /// Truncating three-channel average
    #[default]
    Grey,
    /// Red channel
    Red,
    /// Green channel
    Green,
    /// Blue channel
    Blue,
}

impl HistogramChannel {
    /// All channels, grey first.
    pub const ALL: [HistogramChannel; 4] = [
        HistogramChannel::Grey,
        HistogramChannel::Red,
        HistogramChannel::Green,
        HistogramChannel::Blue,
    ];
}

impl fmt::Display for HistogramChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HistogramChannel::Grey => "grey",
            HistogramChannel::Red => "red",
            HistogramChannel::Green => "green",
            HistogramChannel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Per-channel and grey-level frequency counts
///
/// Each array has 256 bins and sums to the pixel count of the source
/// buffer. `grey[i]` counts pixels whose truncating average
/// `(r + g + b) / 3` equals `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramData {
    /// Red channel histogram
    pub red: [u32; LEVELS],
    /// Green channel histogram
    pub green: [u32; LEVELS],
    /// Blue channel histogram
    pub blue: [u32; LEVELS],
    /// Grey-level histogram
    pub grey: [u32; LEVELS],
}

impl Default for HistogramData {
    fn default() -> Self {
        Self {
            red: [0; LEVELS],
            green: [0; LEVELS],
            blue: [0; LEVELS],
            grey: [0; LEVELS],
        }
    }
}

impl HistogramData {
    /// Get the bins of one channel.
    pub fn channel(&self, channel: HistogramChannel) -> &[u32; LEVELS] {
        match channel {
            HistogramChannel::Grey => &self.grey,
            HistogramChannel::Red => &self.red,
            HistogramChannel::Green => &self.green,
            HistogramChannel::Blue => &self.blue,
        }
    }

    /// Number of pixels counted.
    pub fn total(&self) -> u64 {
        self.grey.iter().map(|&c| c as u64).sum()
    }

    /// Largest bin over the red, green and blue series.
    ///
    /// Suitable as the upper bound of a chart axis showing any channel.
    pub fn max_rgb_count(&self) -> u32 {
        self.red
            .iter()
            .chain(self.green.iter())
            .chain(self.blue.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Compute the red, green, blue and grey histograms of a buffer.
///
/// # Examples
///
/// ```
/// use pixkit_core::{PixelBuffer, compute_histogram};
///
/// let buf = PixelBuffer::filled(4, 4, 128, 64, 200).unwrap();
/// let hist = compute_histogram(&buf);
/// assert_eq!(hist.red[128], 16);
/// assert_eq!(hist.grey[130], 16);
/// ```
pub fn compute_histogram(buf: &PixelBuffer) -> HistogramData {
    let mut hist = HistogramData::default();
    for (r, g, b) in buf.rgb_pixels() {
        hist.red[r as usize] += 1;
        hist.green[g as usize] += 1;
        hist.blue[b as usize] += 1;
        hist.grey[rgb::grey_level(r, g, b) as usize] += 1;
    }
    debug!(
        "histogram: {}x{}, {} pixels",
        buf.width(),
        buf.height(),
        hist.total()
    );
    hist
}

/// Histogram of HSB brightness levels.
///
/// Brightness is the largest normalized channel; its level is
/// `round(brightness * 255)`.
pub fn brightness_histogram(buf: &PixelBuffer) -> [u32; LEVELS] {
    let mut bins = [0u32; LEVELS];
    for (r, g, b) in buf.rgb_pixels() {
        let level = rgb::rgb_to_hsb(r, g, b).brightness_level();
        bins[level as usize] += 1;
    }
    bins
}

impl PixelBuffer {
    /// Compute the red, green, blue and grey histograms.
    ///
    /// See [`compute_histogram`].
    pub fn histogram(&self) -> HistogramData {
        compute_histogram(self)
    }
}
