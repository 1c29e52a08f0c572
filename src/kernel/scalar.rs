//! Scalar reference kernel.

use crate::image::color::load_packed;
use crate::kernel::Kernel;
use crate::template::Template;
use crate::RgbaView;

/// One-sample-at-a-time kernel defining the reference match semantics.
///
/// The anchor is tested first as a prefilter, then the remaining samples in
/// insertion order; the first mismatch rejects the candidate.
pub struct ScalarKernel;

impl Kernel for ScalarKernel {
    #[inline]
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
            // the anchor opens the first row and has already been tested
            let start = row.start.max(1);
            for sample in &samples[start..row.end] {
                if load_packed(data, base + sample.dx) != sample.color.to_bits() {
                    return false;
                }
            }
        }
        true
    }
}
