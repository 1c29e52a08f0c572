//! RGBA pixel buffers.
//!
//! `RgbaView` is a borrowed, validated view into an interleaved RGBA8 buffer
//! laid out row-major with no padding between rows (`stride == width * 4`).
//! The view never copies or retains the caller's bytes beyond its lifetime.

use crate::util::{MatchError, OpaqueMatchResult};

pub mod color;
#[cfg(feature = "image-io")]
pub mod io;

pub use color::PackedColor;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Borrowed RGBA8 image view.
#[derive(Copy, Clone, Debug)]
pub struct RgbaView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> RgbaView<'a> {
    /// Validates `data` against the declared geometry and wraps it.
    ///
    /// Zero-sized views are accepted; they contain no pixels.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> OpaqueMatchResult<Self> {
        check_buffer(data, width, height, channels)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the backing bytes, including any trailing bytes past the last pixel.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the packed color at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<PackedColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let base = (y * self.width + x) * CHANNELS;
        let px = self.data.get(base..base + CHANNELS)?;
        Some(PackedColor::from_rgba([px[0], px[1], px[2], px[3]]))
    }
}

/// Owned RGBA8 image in contiguous row-major layout.
#[derive(Clone, Debug)]
pub struct OwnedRgba {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedRgba {
    /// Creates an owned image, validating the buffer length.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> OpaqueMatchResult<Self> {
        check_buffer(&data, width, height, CHANNELS)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image filled with a single color.
    pub fn filled(width: usize, height: usize, color: PackedColor) -> OpaqueMatchResult<Self> {
        let len = required_len(width, height)?;
        let data = color
            .to_rgba()
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrites the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: usize, y: usize, color: PackedColor) {
        if x >= self.width || y >= self.height {
            return;
        }
        let base = (y * self.width + x) * CHANNELS;
        self.data[base..base + CHANNELS].copy_from_slice(&color.to_rgba());
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> RgbaView<'_> {
        RgbaView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Byte length of a `width x height` RGBA8 image, computed without overflow.
pub(crate) fn required_len(width: usize, height: usize) -> OpaqueMatchResult<usize> {
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(MatchError::InvalidDimensions { width, height })
}

/// Checks channel count first, then geometry, then buffer length.
pub(crate) fn check_buffer(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> OpaqueMatchResult<()> {
    if channels != CHANNELS {
        return Err(MatchError::InvalidChannelCount { channels });
    }
    let needed = required_len(width, height)?;
    if data.len() < needed {
        return Err(MatchError::BufferTooSmall {
            needed,
            got: data.len(),
        });
    }
    Ok(())
}
