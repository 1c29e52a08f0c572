//! Sparse opaque-pixel templates.
//!
//! A template keeps only the pixels whose alpha is exactly 255, in row-major
//! order. Samples that share a row are grouped into [`SampleRow`] buckets so
//! kernels can resolve each haystack row once per candidate.

use crate::image::{PackedColor, CHANNELS};
use std::ops::Range;

mod compile;

/// One opaque template pixel relative to the template's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelSample {
    /// Column offset inside the template.
    pub dx: usize,
    /// Row offset inside the template.
    pub dy: usize,
    /// Packed RGBA color; alpha is always 255.
    pub color: PackedColor,
}

/// Contiguous run of samples that share the same row offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampleRow {
    /// Row offset shared by every sample in the run.
    pub dy: usize,
    /// Index of the first sample of the run.
    pub start: usize,
    /// One past the index of the last sample of the run.
    pub end: usize,
}

impl SampleRow {
    /// Returns the sample index range covered by this row.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of samples in this row.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the row holds no samples.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compiled template: ordered opaque samples plus the source geometry.
///
/// A `Template` always holds at least one sample. The first sample is the
/// anchor: it is tested first at every candidate and its offset converts a
/// window position into the reported match coordinate.
#[derive(Clone, Debug)]
pub struct Template {
    samples: Vec<PixelSample>,
    rows: Vec<SampleRow>,
    width: usize,
    height: usize,
}

impl Template {
    /// Returns the source image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the source image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the channel count of the source image (always 4).
    pub fn channels(&self) -> usize {
        CHANNELS
    }

    /// Returns the number of opaque samples (at least 1).
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Returns all samples in row-major order.
    pub fn samples(&self) -> &[PixelSample] {
        &self.samples
    }

    /// Returns the row buckets in ascending `dy` order.
    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    /// Returns the anchor sample.
    pub fn anchor(&self) -> &PixelSample {
        // compile() refuses to build a template without samples
        &self.samples[0]
    }

    /// Returns the `(dx, dy)` offset of the anchor sample.
    pub fn anchor_offset(&self) -> (usize, usize) {
        let anchor = self.anchor();
        (anchor.dx, anchor.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::MatchError;

    fn rgba(width: usize, height: usize, opaque: &[(usize, usize, [u8; 3])]) -> Vec<u8> {
        let mut data = vec![0u8; width * height * 4];
        for &(x, y, [r, g, b]) in opaque {
            let idx = (y * width + x) * 4;
            data[idx..idx + 4].copy_from_slice(&[r, g, b, 255]);
        }
        data
    }

    #[test]
    fn compile_collects_opaque_pixels_in_scan_order() {
        let data = rgba(4, 3, &[(2, 0, [1, 1, 1]), (0, 1, [2, 2, 2]), (3, 1, [3, 3, 3])]);
        let tpl = Template::compile(&data, 4, 3, 4).unwrap();

        assert_eq!(tpl.width(), 4);
        assert_eq!(tpl.height(), 3);
        assert_eq!(tpl.channels(), 4);
        assert_eq!(tpl.sample_count(), 3);
        assert_eq!(tpl.anchor_offset(), (2, 0));

        let offsets: Vec<_> = tpl.samples().iter().map(|s| (s.dx, s.dy)).collect();
        assert_eq!(offsets, vec![(2, 0), (0, 1), (3, 1)]);
        assert_eq!(
            tpl.samples()[2].color,
            PackedColor::from_rgba([3, 3, 3, 255])
        );
    }

    #[test]
    fn compile_buckets_samples_by_row() {
        let data = rgba(3, 4, &[(0, 1, [5, 0, 0]), (2, 1, [6, 0, 0]), (1, 3, [7, 0, 0])]);
        let tpl = Template::compile(&data, 3, 4, 4).unwrap();

        assert_eq!(
            tpl.rows(),
            &[
                SampleRow {
                    dy: 1,
                    start: 0,
                    end: 2,
                },
                SampleRow {
                    dy: 3,
                    start: 2,
                    end: 3,
                },
            ]
        );
        assert_eq!(tpl.rows()[0].len(), 2);
    }

    #[test]
    fn partially_transparent_pixels_are_not_samples() {
        let mut data = rgba(2, 1, &[(1, 0, [9, 9, 9])]);
        data[3] = 254;
        let tpl = Template::compile(&data, 2, 1, 4).unwrap();
        assert_eq!(tpl.sample_count(), 1);
        assert_eq!(tpl.anchor_offset(), (1, 0));
    }

    #[test]
    fn compile_rejects_transparent_templates() {
        let data: Vec<u8> = (0..9).flat_map(|_| [200u8, 200, 200, 254]).collect();
        let err = Template::compile(&data, 3, 3, 4).unwrap_err();
        assert_eq!(err, MatchError::EmptyTemplate);
    }

    #[test]
    fn compile_rejects_zero_dimensions() {
        assert_eq!(
            Template::compile(&[], 0, 5, 4).unwrap_err(),
            MatchError::EmptyTemplate
        );
    }

    #[test]
    fn compile_validates_channels_then_length() {
        let data = rgba(2, 2, &[(0, 0, [1, 2, 3])]);
        assert_eq!(
            Template::compile(&data, 2, 2, 3).unwrap_err(),
            MatchError::InvalidChannelCount { channels: 3 }
        );
        assert_eq!(
            Template::compile(&data[..15], 2, 2, 4).unwrap_err(),
            MatchError::BufferTooSmall {
                needed: 16,
                got: 15,
            }
        );
    }
}
