//! Error types for opaquematch.

use thiserror::Error;

/// Result alias for opaquematch operations.
pub type OpaqueMatchResult<T> = std::result::Result<T, MatchError>;

/// Errors that can occur when compiling templates or searching haystacks.
///
/// Every variant is caller-recoverable: no operation leaves partial state
/// behind when it fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The pixel buffer does not use 4 interleaved RGBA channels.
    #[error("invalid channel count: expected 4, got {channels}")]
    InvalidChannelCount { channels: usize },
    /// The buffer is shorter than `width * height * channels` bytes.
    #[error("buffer too small: needed {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The template image contains no fully opaque pixel.
    #[error("template has no fully opaque pixels")]
    EmptyTemplate,
    /// A search was requested before any template was compiled.
    #[error("no template compiled")]
    NoTemplate,
    /// The declared dimensions overflow the addressable byte range.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Image decoding failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
