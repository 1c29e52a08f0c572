//! Dense row-major scan over candidate positions.

use crate::kernel::Kernel;
use crate::template::Template;
use crate::RgbaView;

/// Returns the inclusive `(max_x, max_y)` top-left range, or `None` when the
/// template does not fit inside the image.
pub fn placement_range(image: RgbaView<'_>, template: &Template) -> Option<(usize, usize)> {
    let max_x = image.width().checked_sub(template.width())?;
    let max_y = image.height().checked_sub(template.height())?;
    Some((max_x, max_y))
}

/// Scans candidate rows `y0..=y1` (clamped to the valid range) in row-major order.
///
/// Returns the top-left `(sx, sy)` of the first matching window.
pub fn scan_rows<K: Kernel>(
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
    for sy in y0..=y1 {
        for sx in 0..=max_x {
            if K::matches_at(image, template, sx, sy) {
                return Some((sx, sy));
            }
        }
    }
    None
}

/// Scans the full valid placement range sequentially.
pub fn scan_full<K: Kernel>(image: RgbaView<'_>, template: &Template) -> Option<(usize, usize)> {
    scan_rows::<K>(image, template, 0, usize::MAX)
}

/// Scans the full valid placement range with rows spread across the rayon pool.
#[cfg(feature = "rayon")]
pub fn scan_full_par<K: Kernel>(
    image: RgbaView<'_>,
    template: &Template,
) -> Option<(usize, usize)> {
    crate::kernel::rayon::scan_rows_par::<K>(image, template, 0, usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{OwnedRgba, PackedColor};
    use crate::kernel::scalar::ScalarKernel;

    fn dot_template() -> Template {
        Template::compile(&[7, 7, 7, 255], 1, 1, 4).unwrap()
    }

    #[test]
    fn placement_range_is_inclusive() {
        let img = OwnedRgba::filled(5, 3, PackedColor::from_rgba([0, 0, 0, 0])).unwrap();
        let tpl = Template::compile(&[1, 1, 1, 255, 0, 0, 0, 0], 2, 1, 4).unwrap();
        assert_eq!(placement_range(img.view(), &tpl), Some((3, 2)));

        let narrow = OwnedRgba::filled(1, 3, PackedColor::from_rgba([0, 0, 0, 0])).unwrap();
        assert_eq!(placement_range(narrow.view(), &tpl), None);
    }

    #[test]
    fn scan_rows_respects_row_window() {
        let dot = PackedColor::from_rgba([7, 7, 7, 255]);
        let mut img = OwnedRgba::filled(4, 4, PackedColor::from_rgba([0, 0, 0, 255])).unwrap();
        img.put_pixel(3, 0, dot);
        img.put_pixel(1, 2, dot);
        let tpl = dot_template();

        assert_eq!(scan_full::<ScalarKernel>(img.view(), &tpl), Some((3, 0)));
        assert_eq!(scan_rows::<ScalarKernel>(img.view(), &tpl, 1, 3), Some((1, 2)));
        assert_eq!(scan_rows::<ScalarKernel>(img.view(), &tpl, 3, 9), None);
        assert_eq!(scan_rows::<ScalarKernel>(img.view(), &tpl, 5, 9), None);
    }
}
