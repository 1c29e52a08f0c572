//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Every decoded image is
//! converted to RGBA8; formats without alpha become fully opaque.

use crate::image::{OwnedRgba, RgbaView};
use crate::util::{MatchError, OpaqueMatchResult};
use std::path::Path;

/// Creates a borrowed view from an RGBA image buffer.
pub fn view_from_rgba_image(img: &image::RgbaImage) -> OpaqueMatchResult<RgbaView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbaView::new(img.as_raw(), width, height, 4)
}

/// Creates an owned RGBA image from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> OpaqueMatchResult<OwnedRgba> {
    let rgba = img.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    OwnedRgba::new(rgba.into_raw(), width, height)
}

/// Loads an image from disk and converts it to RGBA8.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> OpaqueMatchResult<OwnedRgba> {
    let img = image::open(path).map_err(|err| MatchError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
