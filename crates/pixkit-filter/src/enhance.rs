//! Tone mapping with lookup tables
//!
//! Lookup table generators (gamma, contrast stretch, cumulative
//! equalization), lookup table application, and the two equalization
//! pipelines built from them.
//!
//! Table entries are normalized values in [0.0, 1.0]: applying a table sets
//! each channel to `table[level]`, clamped and rounded to the nearest level.

use crate::{FilterError, FilterResult};
use log::{debug, warn};
use pixkit_color::{is_greyscale, map_pixels};
use pixkit_core::rgb::{self, Hsb};
use pixkit_core::{HistogramData, LEVELS, PixelBuffer, brightness_histogram, compute_histogram};
use std::ops::Index;

/// Smallest gamma offered by interactive controls.
pub const GAMMA_MIN: f64 = 0.1;

/// Largest gamma offered by interactive controls.
pub const GAMMA_MAX: f64 = 10.0;

/// A 256-entry lookup table indexed by channel level.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    values: [f64; LEVELS],
}

impl LookupTable {
    /// Build a table by evaluating `f(level)` for every level 0..=255.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        let mut values = [0.0; LEVELS];
        for (i, entry) in values.iter_mut().enumerate() {
            *entry = f(i);
        }
        Self { values }
    }

    /// Build a table from exactly 256 values.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidLookupTable`] for any other length.
    pub fn from_slice(values: &[f64]) -> FilterResult<Self> {
        let values: [f64; LEVELS] = values
            .try_into()
            .map_err(|_| FilterError::InvalidLookupTable { len: values.len() })?;
        Ok(Self { values })
    }

    /// The identity mapping, `table[i] = i / 255`.
    pub fn identity() -> Self {
        Self::from_fn(|i| i as f64 / 255.0)
    }

    /// Look up the entry for a channel level.
    #[inline]
    pub fn get(&self, level: u8) -> f64 {
        self.values[level as usize]
    }

    /// Get all 256 entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Check whether entries never decrease with the index.
    pub fn is_non_decreasing(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl TryFrom<Vec<f64>> for LookupTable {
    type Error = FilterError;

    fn try_from(values: Vec<f64>) -> FilterResult<Self> {
        Self::from_slice(&values)
    }
}

impl Index<usize> for LookupTable {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Generate a gamma correction table.
///
/// `table[i] = (i / 255) ^ (1 / gamma)`
///
/// `gamma` is not validated; callers supply a positive value, typically in
/// [`GAMMA_MIN`]..=[`GAMMA_MAX`]. Values > 1.0 lighten, values < 1.0 darken.
pub fn gamma_table(gamma: f64) -> LookupTable {
    let exponent = 1.0 / gamma;
    LookupTable::from_fn(|i| (i as f64 / 255.0).powf(exponent))
}

/// A control point of a contrast stretch curve, in level units (0..=255).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastPoint {
    pub x: f64,
    pub y: f64,
}

impl ContrastPoint {
    /// Create a new control point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return the two points ordered by `x`.
    pub fn ordered(p1: ContrastPoint, p2: ContrastPoint) -> (ContrastPoint, ContrastPoint) {
        if p1.x > p2.x { (p2, p1) } else { (p1, p2) }
    }

    fn in_range(&self) -> bool {
        (0.0..=255.0).contains(&self.x) && (0.0..=255.0).contains(&self.y)
    }
}

/// Generate a piecewise-linear contrast stretch table.
///
/// The curve runs (0, 0) -> `p1` -> `p2` -> (255, 255); each output is
/// divided by 255.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if a coordinate lies outside
/// [0, 255], if `p1.x > p2.x` (see [`ContrastPoint::ordered`]), or if
/// `p1.x == p2.x`, which leaves the middle segment without width.
pub fn contrast_table(p1: ContrastPoint, p2: ContrastPoint) -> FilterResult<LookupTable> {
    if !p1.in_range() || !p2.in_range() {
        return Err(FilterError::InvalidParameters(format!(
            "contrast points must lie in [0, 255]: {p1:?}, {p2:?}"
        )));
    }
    if p1.x > p2.x {
        return Err(FilterError::InvalidParameters(format!(
            "contrast points out of order: x1 = {} > x2 = {}",
            p1.x, p2.x
        )));
    }
    if p1.x == p2.x {
        return Err(FilterError::InvalidParameters(format!(
            "contrast points share x = {}",
            p1.x
        )));
    }

    // Segments with zero width are never evaluated: i < p1.x is empty when
    // p1.x == 0 and i > p2.x is empty when p2.x == 255.
    Ok(LookupTable::from_fn(|i| {
        let i = i as f64;
        let level = if i < p1.x {
            (p1.y / p1.x) * i
        } else if i <= p2.x {
            ((p2.y - p1.y) / (p2.x - p1.x)) * (i - p1.x) + p1.y
        } else {
            ((255.0 - p2.y) / (255.0 - p2.x)) * (i - p2.x) + p2.y
        };
        level / 255.0
    }))
}

/// Generate a cumulative equalization table from histogram bins.
///
/// `table[i] = (bins[0] + ... + bins[i]) / pixel_count`. The result is
/// non-decreasing and reaches 1.0 once every counted pixel is included.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `pixel_count` is 0.
pub fn equalization_table(bins: &[u32; LEVELS], pixel_count: u64) -> FilterResult<LookupTable> {
    if pixel_count == 0 {
        return Err(FilterError::InvalidParameters(
            "pixel_count must be > 0".into(),
        ));
    }

    let total = pixel_count as f64;
    let mut cumulative = 0u64;
    Ok(LookupTable::from_fn(|i| {
        cumulative += bins[i] as u64;
        cumulative as f64 / total
    }))
}

/// Generate an equalization table from the grey-level histogram.
///
/// Intended for greyscale images, where the grey bins equal each channel's
/// bins.
pub fn grey_equalization_table(histogram: &HistogramData) -> FilterResult<LookupTable> {
    equalization_table(&histogram.grey, histogram.total())
}

/// Map every channel of every pixel through a lookup table.
///
/// Each channel level indexes `table`; the entry is clamped to [0.0, 1.0]
/// and rounded to the nearest level (NaN becomes 0).
pub fn apply_lookup_table(buf: &PixelBuffer, table: &LookupTable) -> FilterResult<PixelBuffer> {
    let levels: [u8; LEVELS] = std::array::from_fn(|i| rgb::from_normalized(table[i]));
    Ok(map_pixels(buf, |r, g, b| {
        (levels[r as usize], levels[g as usize], levels[b as usize])
    }))
}

/// Histogram-equalize a greyscale buffer.
///
/// Builds the grey-level histogram, turns it into a cumulative table and
/// applies that table to all three channels. Colour input is accepted, but
/// the grey-level statistics then do not describe any single channel.
pub fn equalize_grey(buf: &PixelBuffer) -> FilterResult<PixelBuffer> {
    if !is_greyscale(buf) {
        warn!(
            "equalize_grey: {}x{} input is not greyscale; channels are mapped by grey-level statistics",
            buf.width(),
            buf.height()
        );
    }
    let histogram = compute_histogram(buf);
    let table = grey_equalization_table(&histogram)?;
    apply_lookup_table(buf, &table)
}

/// Equalize HSB brightness while keeping hue and saturation.
///
/// 1. Histogram the brightness level of every pixel
/// 2. Build the cumulative table of that histogram
/// 3. For each pixel, replace the brightness with `table[brightness_level]`
///    (used directly as a normalized brightness) and convert back to RGB
///
/// # Known issue
///
/// This pipeline is known not to behave like a textbook histogram
/// equalization: the brightness is the largest channel only, the HSB round
/// trip re-quantizes every channel, and dark levels are lifted to their
/// cumulative fraction rather than spread over the range. The behaviour is
/// kept as is; do not rely on it for calibrated output.
pub fn equalize_brightness(buf: &PixelBuffer) -> FilterResult<PixelBuffer> {
    let bins = brightness_histogram(buf);
    let table = equalization_table(&bins, buf.pixel_count())?;
    debug!(
        "equalize_brightness: {} pixels, table[0] = {:.4}",
        buf.pixel_count(),
        table[0]
    );

    Ok(map_pixels(buf, |r, g, b| {
        let hsb = rgb::rgb_to_hsb(r, g, b);
        let brightness = table.get(hsb.brightness_level());
        rgb::hsb_to_rgb(Hsb::new(hsb.hue, hsb.saturation, brightness))
    }))
}
