//! Point transforms
//!
//! Pure per-pixel color maps. Each function reads the source buffer and
//! builds a new one of identical dimensions; the source is never modified.

use crate::ColorResult;
use pixkit_core::{MAX_LEVEL, PixelBuffer, PixelBufferMut, rgb};

/// Apply `f` to every pixel and collect the results in a new buffer.
///
/// `f` receives and returns `(r, g, b)` channel levels.
pub fn map_pixels<F>(buf: &PixelBuffer, mut f: F) -> PixelBuffer
where
    F: FnMut(u8, u8, u8) -> (u8, u8, u8),
{
    let mut out = PixelBufferMut::new_like(buf);
    for (dst, &src) in out.data_mut().iter_mut().zip(buf.data()) {
        let (r, g, b) = rgb::extract_rgb(src);
        let (nr, ng, nb) = f(r, g, b);
        *dst = rgb::compose_rgb(nr, ng, nb);
    }
    out.into()
}

/// Invert every channel.
///
/// In the normalized domain the output is `1.0 - c`; on channel levels this
/// is exactly `255 - c`, so inverting twice restores the input.
///
/// # Examples
///
/// ```
/// use pixkit_core::PixelBuffer;
/// use pixkit_color::invert;
///
/// let buf = PixelBuffer::filled(4, 4, 128, 64, 200).unwrap();
/// let inv = invert(&buf).unwrap();
/// assert_eq!(inv.get_rgb(0, 0), Some((127, 191, 55)));
/// ```
pub fn invert(buf: &PixelBuffer) -> ColorResult<PixelBuffer> {
    Ok(map_pixels(buf, |r, g, b| {
        (MAX_LEVEL - r, MAX_LEVEL - g, MAX_LEVEL - b)
    }))
}

/// Convert to greyscale with a truncating three-channel average.
///
/// `grey = (r + g + b) / 3` using integer division; all three output
/// channels are set to `grey`. The truncation darkens slightly compared to
/// a real-valued average. Applying the conversion twice gives the same
/// result as applying it once.
pub fn to_greyscale(buf: &PixelBuffer) -> ColorResult<PixelBuffer> {
    Ok(map_pixels(buf, |r, g, b| {
        let grey = rgb::grey_level(r, g, b);
        (grey, grey, grey)
    }))
}

/// Check whether every pixel has equal red, green and blue channels.
pub fn is_greyscale(buf: &PixelBuffer) -> bool {
    buf.rgb_pixels().all(|(r, g, b)| r == g && g == b)
}
