//! Per-candidate exact-match kernels.
//!
//! A kernel answers one question: does the template match the haystack with
//! its top-left corner at `(sx, sy)`? Every kernel tests the anchor sample
//! first and returns the same answer as [`scalar::ScalarKernel`].

use crate::template::Template;
use crate::RgbaView;

/// Kernel trait for the per-candidate exact-match test.
pub trait Kernel {
    /// Returns true if every template sample matches the haystack at `(sx, sy)`.
    ///
    /// The caller guarantees `sx + template.width() <= image.width()` and
    /// `sy + template.height() <= image.height()`.
    fn matches_at(image: RgbaView<'_>, template: &Template, sx: usize, sy: usize) -> bool;
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Kernel used by the high-level search: SIMD when available.
#[cfg(not(feature = "simd"))]
pub type DefaultKernel = scalar::ScalarKernel;
/// Kernel used by the high-level search: SIMD when available.
#[cfg(feature = "simd")]
pub type DefaultKernel = simd::SimdKernel;
