//! Convolution with range normalization
//!
//! Applies a square kernel to every pixel where it can be fully centered and
//! linearly rescales the raw responses into the channel range.
//!
//! # Algorithm
//!
//! 1. Raw pass: for each interior pixel compute, per channel,
//!    `sum(kernel[j][i] * channel(x + i - offset, y + j - offset))` on 0..=255
//!    channel levels. The global minimum and maximum are reduced over all
//!    three channels of all interior pixels together.
//! 2. Normalization pass: map every raw value with
//!    `(raw - min) * 255 / (max - min)` in truncating integer arithmetic.
//!
//! Pixels within `offset` of any edge are not processed and stay black.
//! When `max == min` the division is undefined and every interior channel
//! is set to [`ConvolveOptions::flat_fill`] instead.

use crate::{FilterResult, Kernel, KernelKind};
use log::{debug, warn};
use pixkit_core::{PixelBuffer, PixelBufferMut, rgb};

/// Options for [`apply_kernel_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvolveOptions {
    /// Level written to every interior channel when the raw response is
    /// flat (`max == min`).
    pub flat_fill: u8,
}

impl Default for ConvolveOptions {
    fn default() -> Self {
        Self { flat_fill: 0 }
    }
}

/// Raw kernel responses over the interior region.
struct RawResponse {
    /// First interior column/row
    offset: u32,
    /// Interior width
    width: u32,
    /// Per-channel raw sums, row-major over the interior
    values: Vec<[i64; 3]>,
    /// Smallest raw value over all channels
    min: i64,
    /// Largest raw value over all channels
    max: i64,
}

/// Convolve a buffer with a kernel, using default options.
///
/// # Examples
///
/// ```
/// use pixkit_core::PixelBuffer;
/// use pixkit_filter::{KernelKind, apply_kernel};
///
/// let buf = PixelBuffer::from_fn(6, 6, |x, _| if x < 3 { (0, 0, 0) } else { (255, 255, 255) })
///     .unwrap();
/// let edges = apply_kernel(&buf, KernelKind::SobelX.kernel()).unwrap();
/// // Border pixels are black
/// assert_eq!(edges.get_rgb(0, 0), Some((0, 0, 0)));
/// ```
pub fn apply_kernel(buf: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    apply_kernel_with(buf, kernel, &ConvolveOptions::default())
}

/// Convolve a buffer with a catalog kernel, using default options.
pub fn apply_kernel_kind(buf: &PixelBuffer, kind: KernelKind) -> FilterResult<PixelBuffer> {
    apply_kernel(buf, kind.kernel())
}

/// Convolve a buffer with a kernel.
///
/// The output has the dimensions of `buf`. Border pixels (within
/// `kernel.offset()` of an edge) are black; interior pixels hold the
/// normalized response. An image too small to have any interior pixel
/// comes back entirely black.
pub fn apply_kernel_with(
    buf: &PixelBuffer,
    kernel: &Kernel,
    options: &ConvolveOptions,
) -> FilterResult<PixelBuffer> {
    let mut out = PixelBufferMut::new_like(buf);

    let Some(raw) = raw_response(buf, kernel) else {
        warn!(
            "apply_kernel: {} ({}x{}) does not fit a {}x{} image; output is all border",
            kernel.name(),
            kernel.side(),
            kernel.side(),
            buf.width(),
            buf.height()
        );
        return Ok(out.into());
    };

    debug!(
        "apply_kernel: {} offset={} raw range [{}, {}]",
        kernel.name(),
        raw.offset,
        raw.min,
        raw.max
    );

    let span = raw.max - raw.min;
    if span == 0 {
        warn!(
            "apply_kernel: flat response {}, filling interior with {}",
            raw.min, options.flat_fill
        );
    }
    let normalize = |value: i64| -> u8 {
        if span == 0 {
            options.flat_fill
        } else {
            ((value - raw.min) * 255 / span) as u8
        }
    };

    for (i, [r, g, b]) in raw.values.iter().copied().enumerate() {
        let x = raw.offset + (i as u32) % raw.width;
        let y = raw.offset + (i as u32) / raw.width;
        out.set_rgb_unchecked(x, y, normalize(r), normalize(g), normalize(b));
    }

    Ok(out.into())
}

/// Compute raw responses for every interior pixel and their global range.
///
/// Returns `None` when the kernel cannot be centered on any pixel.
fn raw_response(buf: &PixelBuffer, kernel: &Kernel) -> Option<RawResponse> {
    let w = buf.width();
    let h = buf.height();
    let offset = kernel.offset();
    if w <= 2 * offset || h <= 2 * offset {
        return None;
    }

    let inner_w = w - 2 * offset;
    let inner_h = h - 2 * offset;
    let side = kernel.side();
    let coeffs = kernel.data();

    let mut values = Vec::with_capacity((inner_w as usize) * (inner_h as usize));
    for y in offset..h - offset {
        for x in offset..w - offset {
            let mut sum = [0i64; 3];
            for j in 0..side {
                let row = buf.row_data(y + j - offset);
                for i in 0..side {
                    let k = coeffs[(j * side + i) as usize] as i64;
                    if k == 0 {
                        continue;
                    }
                    let (r, g, b) = rgb::extract_rgb(row[(x + i - offset) as usize]);
                    sum[0] += k * r as i64;
                    sum[1] += k * g as i64;
                    sum[2] += k * b as i64;
                }
            }
            values.push(sum);
        }
    }

    let (min, max) = values
        .iter()
        .flatten()
        .fold((i64::MAX, i64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    Some(RawResponse {
        offset,
        width: inner_w,
        values,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image() -> PixelBuffer {
        PixelBuffer::from_fn(8, 6, |x, y| {
            ((x * 30) as u8, (y * 40) as u8, ((x + y) * 10) as u8)
        })
        .unwrap()
    }

    fn is_border(x: u32, y: u32, w: u32, h: u32, o: u32) -> bool {
        x < o || y < o || x >= w - o || y >= h - o
    }

    #[test]
    fn test_border_is_black() {
        let buf = create_test_image();
        for kind in KernelKind::ALL {
            let out = apply_kernel_kind(&buf, kind).unwrap();
            let o = kind.kernel().offset();
            let mut black = 0;
            for y in 0..6 {
                for x in 0..8 {
                    if is_border(x, y, 8, 6, o) {
                        assert_eq!(out.get_rgb(x, y), Some((0, 0, 0)), "{kind} at ({x},{y})");
                        black += 1;
                    }
                }
            }
            assert_eq!(black, 8 * 6 - (8 - 2 * o) * (6 - 2 * o), "{kind}");
        }
    }

    #[test]
    fn test_normalization_spans_full_range() {
        let buf = create_test_image();
        let out = apply_kernel_kind(&buf, KernelKind::SobelX).unwrap();
        let mut levels = Vec::new();
        for y in 1..5 {
            for x in 1..7 {
                let (r, g, b) = out.get_rgb_unchecked(x, y);
                levels.extend([r, g, b]);
            }
        }
        assert_eq!(levels.iter().copied().min(), Some(0));
        assert_eq!(levels.iter().copied().max(), Some(255));
    }

    #[test]
    fn test_low_pass_uniform_uses_flat_fill() {
        let buf = PixelBuffer::filled(5, 5, 10, 20, 30).unwrap();
        let kernel = KernelKind::LowPass.kernel();

        let raw = raw_response(&buf, kernel).unwrap();
        assert_eq!(raw.values.len(), 9);
        assert!(raw.values.iter().all(|&v| v == [90, 180, 270]));
        assert_eq!((raw.min, raw.max), (90, 270));

        // Channels differ, so the range is not flat: R -> 0, G -> 127, B -> 255
        let out = apply_kernel(&buf, kernel).unwrap();
        assert_eq!(out.get_rgb(2, 2), Some((0, 127, 255)));
    }

    #[test]
    fn test_flat_response_fill_value() {
        let buf = PixelBuffer::filled(5, 5, 77, 77, 77).unwrap();
        let kernel = KernelKind::LowPass.kernel();

        let out = apply_kernel(&buf, kernel).unwrap();
        assert_eq!(out.get_rgb(2, 2), Some((0, 0, 0)));

        let options = ConvolveOptions { flat_fill: 128 };
        let out = apply_kernel_with(&buf, kernel, &options).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(out.get_rgb(x, y), Some((128, 128, 128)));
            }
        }
        assert_eq!(out.get_rgb(0, 2), Some((0, 0, 0)));
    }

    #[test]
    fn test_image_smaller_than_kernel() {
        let buf = PixelBuffer::filled(4, 4, 200, 200, 200).unwrap();
        let out = apply_kernel_kind(&buf, KernelKind::Laplacian).unwrap();
        assert!(out.sizes_equal(&buf));
        assert!(out.rgb_pixels().all(|p| p == (0, 0, 0)));
    }

    #[test]
    fn test_custom_identity_kernel() {
        let kernel = Kernel::from_slice("identity", 3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        let buf = PixelBuffer::from_fn(4, 3, |x, _| ((x * 10) as u8, 0, 0)).unwrap();
        let out = apply_kernel(&buf, &kernel).unwrap();
        // Interior values 10 and 20, channel G/B are 0: range [0, 20]
        assert_eq!(out.get_rgb(1, 1), Some((127, 0, 0)));
        assert_eq!(out.get_rgb(2, 1), Some((255, 0, 0)));
    }

    #[test]
    fn test_source_not_modified() {
        let buf = create_test_image();
        let before = buf.clone().to_rgb_bytes();
        let _ = apply_kernel_kind(&buf, KernelKind::Emboss).unwrap();
        assert_eq!(buf.to_rgb_bytes(), before);
    }
}
