//! SIMD-batched kernel using the `wide` crate.
//!
//! After the anchor prefilter, samples are compared per row bucket eight at a
//! time with `u32x8`. A batch can read samples past the first mismatching one,
//! but every sample lies inside the candidate window, which the scan has
//! already bounds-checked, so the outcome is identical to the scalar kernel.

use crate::image::color::load_packed;
use crate::kernel::Kernel;
use crate::template::{PixelSample, Template};
use crate::RgbaView;
use wide::u32x8;

const LANES: usize = 8;

/// Gather eight haystack pixels at the batch's column offsets.
#[inline]
fn gather_haystack(data: &[u8], base: usize, batch: &[PixelSample]) -> u32x8 {
    let mut lanes = [0u32; LANES];
    for (lane, sample) in lanes.iter_mut().zip(batch) {
        *lane = load_packed(data, base + sample.dx);
    }
    u32x8::from(lanes)
}

/// Load the eight expected colors of a batch.
#[inline]
fn load_colors(batch: &[PixelSample]) -> u32x8 {
    let mut lanes = [0u32; LANES];
    for (lane, sample) in lanes.iter_mut().zip(batch) {
        *lane = sample.color.to_bits();
    }
    u32x8::from(lanes)
}

/// SIMD-batched exact-match kernel.
pub struct SimdKernel;

impl Kernel for SimdKernel {
    fn matches_at(image: RgbaView<'_>, template: &Template, sx: usize, sy: usize) -> bool {
        let data = image.as_bytes();
        let width = image.width();

        let anchor = template.anchor();
        let anchor_idx = (sy + anchor.dy) * width + sx + anchor.dx;
        if load_packed(data, anchor_idx) != anchor.color.to_bits() {
            return false;
        }

        let samples = template.samples();
        for row in template.rows() {
            let base = (sy + row.dy) * width + sx;
            let row_samples = &samples[row.start.max(1)..row.end];

            let mut batches = row_samples.chunks_exact(LANES);
            for batch in &mut batches {
                let diff = gather_haystack(data, base, batch) ^ load_colors(batch);
                if diff.to_array() != [0u32; LANES] {
                    return false;
                }
            }

            // Scalar remainder
            for sample in batches.remainder() {
                if load_packed(data, base + sample.dx) != sample.color.to_bits() {
                    return false;
                }
            }
        }
        true
    }
}
