//! Rayon-parallel scan (feature-gated).
//!
//! Candidate rows are distributed across the rayon pool. `find_map_first`
//! yields the match from the lowest row that has one, and each row is scanned
//! left to right, so the result equals the sequential row-major scan.

use crate::kernel::Kernel;
use crate::search::scan::placement_range;
use crate::template::Template;
use crate::RgbaView;
use rayon::prelude::*;

/// Row-parallel scan over candidate rows `y0..=y1` (clamped to the valid range).
///
/// Returns the top-left `(sx, sy)` of the first matching window in row-major
/// order, or `None` when the template does not fit inside the image.
pub fn scan_rows_par<K: Kernel>(
    image: RgbaView<'_>,
    template: &Template,
    y0: usize,
    y1: usize,
) -> Option<(usize, usize)> {
    let (max_x, max_y) = placement_range(image, template)?;
    let y1 = y1.min(max_y);
    if y0 > y1 {
        return None;
    }
    (y0..=y1).into_par_iter().find_map_first(|sy| {
        (0..=max_x)
            .find(|&sx| K::matches_at(image, template, sx, sy))
            .map(|sx| (sx, sy))
    })
}
