//! Template compilation from raw RGBA buffers.

use super::{PixelSample, SampleRow, Template};
use crate::image::color::OPAQUE_ALPHA;
use crate::image::{check_buffer, PackedColor, CHANNELS};
use crate::trace::{trace_event, trace_span};
use crate::util::{MatchError, OpaqueMatchResult};

impl Template {
    /// Compiles a template from an interleaved RGBA8 buffer.
    ///
    /// Pixels with alpha exactly 255 become samples, in row-major order. The
    /// buffer is scanned twice: once to size the sample store exactly and once
    /// to fill it.
    pub fn compile(
        data: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> OpaqueMatchResult<Self> {
        check_buffer(data, width, height, channels)?;
        let _span = trace_span!("compile_template", width = width, height = height).entered();

        let pixels = &data[..width * height * CHANNELS];
        let count = pixels
            .chunks_exact(CHANNELS)
            .filter(|px| px[3] == OPAQUE_ALPHA)
            .count();
        if count == 0 {
            return Err(MatchError::EmptyTemplate);
        }

        let mut samples = Vec::with_capacity(count);
        let mut rows: Vec<SampleRow> = Vec::new();
        for (dy, row) in pixels.chunks_exact(width * CHANNELS).enumerate() {
            let start = samples.len();
            for (dx, px) in row.chunks_exact(CHANNELS).enumerate() {
                if px[3] != OPAQUE_ALPHA {
                    continue;
                }
                samples.push(PixelSample {
                    dx,
                    dy,
                    color: PackedColor::from_rgba([px[0], px[1], px[2], px[3]]),
                });
            }
            if samples.len() > start {
                rows.push(SampleRow {
                    dy,
                    start,
                    end: samples.len(),
                });
            }
        }

        trace_event!(
            "template_compiled",
            samples = samples.len(),
            rows = rows.len()
        );

        Ok(Self {
            samples,
            rows,
            width,
            height,
        })
    }
}
