//! Low-level building blocks for custom scan strategies.
//!
//! These expose the kernels and row-range scans behind [`crate::search`], for
//! callers that want to restrict the scanned rows or pin a specific kernel.
//! Most users should prefer [`crate::Session`] or [`crate::search()`].

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::scan_rows_par;
pub use crate::kernel::scalar::ScalarKernel;
#[cfg(feature = "simd")]
pub use crate::kernel::simd::SimdKernel;
pub use crate::kernel::{DefaultKernel, Kernel};
#[cfg(feature = "rayon")]
pub use crate::search::scan::scan_full_par;
pub use crate::search::scan::{placement_range, scan_full, scan_rows};
