//! OpaqueMatch locates a small RGBA sprite inside a larger frame, pixel-exact.
//!
//! Only the template's fully opaque pixels (alpha == 255) take part in the
//! comparison. A template is compiled once into a sparse sample set, then any
//! number of haystacks can be scanned for the first exact occurrence in
//! row-major order. SIMD batching (`simd`) and row-parallel scanning (`rayon`)
//! are optional and never change the result.
//!
//! ```
//! use opaquematch::Session;
//!
//! // 1x1 template: a single opaque red pixel.
//! let template = [255u8, 0, 0, 255];
//! let mut session = Session::new();
//! session.compile(&template, 1, 1, 4).unwrap();
//!
//! // 2x1 haystack with the red pixel on the right.
//! let frame = [0u8, 0, 0, 255, 255, 0, 0, 255];
//! let hit = session.search(&frame, 2, 1, 4).unwrap();
//! assert_eq!(hit.position(), Some((1, 0)));
//! ```

pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod search;
pub mod session;
pub mod template;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{OwnedRgba, PackedColor, RgbaView, CHANNELS};
pub use search::{find, search, MatchResult, SearchConfig};
pub use session::Session;
pub use template::{PixelSample, SampleRow, Template};
pub use util::{MatchError, OpaqueMatchResult};
