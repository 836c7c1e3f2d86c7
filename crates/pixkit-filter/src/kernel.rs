//! Convolution kernels
//!
//! A [`Kernel`] is an immutable square matrix of signed integers with an odd
//! side length, so a unique center cell exists. The built-in catalog is the
//! closed set [`KernelKind`]; its matrices are materialised once per process
//! and shared as `&'static Kernel`.

use crate::{FilterError, FilterResult};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[rustfmt::skip]
const LAPLACIAN: [i32; 25] = [
    -4, -1,  0, -1, -4,
    -1,  2,  3,  2, -1,
     0,  3,  4,  3,  0,
    -1,  2,  3,  2, -1,
    -4, -1,  0, -1, -4,
];

#[rustfmt::skip]
const HIGH_PASS: [i32; 9] = [
    -1, -1, -1,
    -1,  8, -1,
    -1, -1, -1,
];

#[rustfmt::skip]
const EMBOSS: [i32; 9] = [
    -1, -1, -1,
    -1,  1,  1,
    -1,  1,  1,
];

#[rustfmt::skip]
const SOBEL_X: [i32; 9] = [
    -1, 0, 1,
    -2, 0, 2,
    -1, 0, 1,
];

#[rustfmt::skip]
const SOBEL_Y: [i32; 9] = [
     1,  2,  1,
     0,  0,  0,
    -1, -2, -1,
];

#[rustfmt::skip]
const LOW_PASS: [i32; 9] = [
    1, 1, 1,
    1, 1, 1,
    1, 1, 1,
];

static CATALOG: LazyLock<Vec<Kernel>> = LazyLock::new(|| {
    KernelKind::ALL
        .iter()
        .map(|&kind| Kernel {
            name: kind.name().to_string(),
            side: kind.side(),
            data: kind.coefficients().to_vec(),
        })
        .collect()
});

/// A square convolution kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    /// Display name
    name: String,
    /// Side length (odd, >= 3)
    side: u32,
    /// Coefficients (row-major order)
    data: Vec<i32>,
}

impl Kernel {
    /// Create a kernel from row-major coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `side` is even or less than
    /// 3, or if `data.len() != side * side`.
    pub fn from_slice(name: &str, side: u32, data: &[i32]) -> FilterResult<Self> {
        if side < 3 || side % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "side must be odd and >= 3, got {side}"
            )));
        }
        let expected = (side as usize) * (side as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} coefficients for a {side}x{side} kernel, got {}",
                data.len()
            )));
        }
        Ok(Self {
            name: name.to_string(),
            side,
            data: data.to_vec(),
        })
    }

    /// Get the kernel name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the side length.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of border pixels on each edge the kernel cannot cover.
    ///
    /// `(side - 1) / 2`
    #[inline]
    pub fn offset(&self) -> u32 {
        (self.side - 1) / 2
    }

    /// Get the coefficients in row-major order.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get the coefficient at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.side || y >= self.side {
            return None;
        }
        Some(self.data[(y * self.side + x) as usize])
    }

    /// Get the sum of all coefficients.
    pub fn sum(&self) -> i64 {
        self.data.iter().map(|&k| k as i64).sum()
    }
}

/// The built-in kernel catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    /// 5x5 Laplacian edge detector
    Laplacian,
    /// 3x3 high-pass (sharpen to edges)
    HighPass,
    /// 3x3 emboss
    Emboss,
    /// 3x3 Sobel, horizontal gradient
    SobelX,
    /// 3x3 Sobel, vertical gradient
    SobelY,
    /// 3x3 low-pass (unnormalized box)
    LowPass,
}

impl KernelKind {
    /// Every catalog entry, in catalog order.
    pub const ALL: [KernelKind; 6] = [
        KernelKind::Laplacian,
        KernelKind::HighPass,
        KernelKind::Emboss,
        KernelKind::SobelX,
        KernelKind::SobelY,
        KernelKind::LowPass,
    ];

    /// Catalog name, e.g. `"HIGH_PASS"`.
    pub fn name(self) -> &'static str {
        match self {
            KernelKind::Laplacian => "LAPLACIAN",
            KernelKind::HighPass => "HIGH_PASS",
            KernelKind::Emboss => "EMBOSS",
            KernelKind::SobelX => "SOBEL_X",
            KernelKind::SobelY => "SOBEL_Y",
            KernelKind::LowPass => "LOW_PASS",
        }
    }

    fn side(self) -> u32 {
        match self {
            KernelKind::Laplacian => 5,
            _ => 3,
        }
    }

    fn coefficients(self) -> &'static [i32] {
        match self {
            KernelKind::Laplacian => &LAPLACIAN,
            KernelKind::HighPass => &HIGH_PASS,
            KernelKind::Emboss => &EMBOSS,
            KernelKind::SobelX => &SOBEL_X,
            KernelKind::SobelY => &SOBEL_Y,
            KernelKind::LowPass => &LOW_PASS,
        }
    }

    /// The shared kernel for this catalog entry.
    pub fn kernel(self) -> &'static Kernel {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = FilterError;

    /// Parse a catalog name; case, `_`, `-` and spaces are ignored.
    fn from_str(s: &str) -> FilterResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        KernelKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().replace('_', "").to_lowercase() == key)
            .ok_or_else(|| FilterError::InvalidKernel(format!("unknown kernel name: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes() {
        for kind in KernelKind::ALL {
            let k = kind.kernel();
            assert_eq!(k.side() % 2, 1, "{kind}");
            assert_eq!(k.data().len(), (k.side() * k.side()) as usize);
            assert_eq!(k.name(), kind.name());
        }
        assert_eq!(KernelKind::Laplacian.kernel().offset(), 2);
        assert_eq!(KernelKind::SobelX.kernel().offset(), 1);
    }

    #[test]
    fn test_catalog_coefficients() {
        let sobel_y = KernelKind::SobelY.kernel();
        assert_eq!(sobel_y.get(0, 0), Some(1));
        assert_eq!(sobel_y.get(1, 2), Some(-2));
        assert_eq!(sobel_y.get(3, 0), None);
        assert_eq!(KernelKind::HighPass.kernel().sum(), 0);
        assert_eq!(KernelKind::LowPass.kernel().sum(), 9);
        assert_eq!(KernelKind::Laplacian.kernel().get(2, 2), Some(4));
    }

    #[test]
    fn test_catalog_is_shared() {
        let a = KernelKind::Emboss.kernel() as *const Kernel;
        let b = KernelKind::Emboss.kernel() as *const Kernel;
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_slice_validation() {
        assert!(Kernel::from_slice("even", 2, &[0; 4]).is_err());
        assert!(Kernel::from_slice("tiny", 1, &[1]).is_err());
        assert!(Kernel::from_slice("short", 3, &[0; 8]).is_err());
        let k = Kernel::from_slice("identity", 3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert_eq!(k.offset(), 1);
        assert_eq!(k.sum(), 1);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("LAPLACIAN".parse::<KernelKind>().unwrap(), KernelKind::Laplacian);
        assert_eq!("high_pass".parse::<KernelKind>().unwrap(), KernelKind::HighPass);
        assert_eq!("Sobel-X".parse::<KernelKind>().unwrap(), KernelKind::SobelX);
        assert_eq!("low pass".parse::<KernelKind>().unwrap(), KernelKind::LowPass);
        assert!("gaussian".parse::<KernelKind>().is_err());
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in KernelKind::ALL {
            assert_eq!(kind.to_string().parse::<KernelKind>().unwrap(), kind);
        }
    }
}
