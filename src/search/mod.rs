//! Search engine: exhaustive exact-match scan of a haystack.
//!
//! Candidate windows are visited row-major (top to bottom, then left to
//! right) and the first full match wins, so the reported position is
//! deterministic when the pattern occurs more than once.

pub mod scan;

use crate::image::RgbaView;
use crate::kernel::DefaultKernel;
use crate::template::Template;
use crate::trace::{trace_event, trace_span};
use crate::util::OpaqueMatchResult;

/// Outcome of a search.
///
/// When `found` is true, `(x, y)` is the haystack coordinate of the template's
/// anchor pixel, i.e. window top-left plus the anchor offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether a match was found.
    pub found: bool,
    /// Haystack column of the anchor pixel (0 when not found).
    pub x: usize,
    /// Haystack row of the anchor pixel (0 when not found).
    pub y: usize,
}

impl MatchResult {
    /// A result carrying no match.
    pub const fn not_found() -> Self {
        Self {
            found: false,
            x: 0,
            y: 0,
        }
    }

    /// A match at anchor coordinate `(x, y)`.
    pub const fn at(x: usize, y: usize) -> Self {
        Self { found: true, x, y }
    }

    /// Returns the anchor coordinate if a match was found.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.found.then_some((self.x, self.y))
    }
}

/// Configuration for the search engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Spread candidate rows across the rayon pool (requires the `rayon`
    /// feature; otherwise the sequential scan runs). Results are identical.
    pub parallel: bool,
}

/// Searches a validated haystack view for the template.
///
/// A haystack smaller than the template yields `found = false`.
pub fn search(template: &Template, image: RgbaView<'_>, cfg: &SearchConfig) -> MatchResult {
    let _span = trace_span!(
        "search",
        width = image.width(),
        height = image.height(),
        parallel = cfg.parallel
    )
    .entered();

    let window = scan_window(template, image, cfg);
    let result = match window {
        Some((sx, sy)) => {
            let (dx, dy) = template.anchor_offset();
            MatchResult::at(sx + dx, sy + dy)
        }
        None => MatchResult::not_found(),
    };

    trace_event!(
        "search_done",
        found = result.found,
        x = result.x,
        y = result.y
    );
    result
}

/// Validates a raw RGBA buffer and searches it for the template.
pub fn find(
    template: &Template,
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    cfg: &SearchConfig,
) -> OpaqueMatchResult<MatchResult> {
    let image = RgbaView::new(data, width, height, channels)?;
    Ok(search(template, image, cfg))
}

#[cfg(feature = "rayon")]
fn scan_window(
    template: &Template,
    image: RgbaView<'_>,
    cfg: &SearchConfig,
) -> Option<(usize, usize)> {
    if cfg.parallel {
        scan::scan_full_par::<DefaultKernel>(image, template)
    } else {
        scan::scan_full::<DefaultKernel>(image, template)
    }
}

#[cfg(not(feature = "rayon"))]
fn scan_window(
    template: &Template,
    image: RgbaView<'_>,
    _cfg: &SearchConfig,
) -> Option<(usize, usize)> {
    scan::scan_full::<DefaultKernel>(image, template)
}
