//! A comparator-driven, stable merge sort for random-access slices.
//!
//! The crate exposes a single sorting component. [`sort`] and [`sort_by`]
//! sort a slice in place, [`is_sorted`] and [`is_sorted_by`] check a slice
//! for inversions without modifying it, and the [`raw`] module mirrors both
//! for raw pointer/length pairs as they come in over FFI-style call sites.
//!
//! The sort is stable (equal-ranking elements keep their relative order),
//! runs in *O*(*n* \* log(*n*)) comparisons with *O*(*n*) auxiliary space,
//! and reports scratch-allocation failure as [`SortError::ResourceExhaustion`]
//! instead of aborting.

pub mod error;
pub mod merge;
pub mod raw;

pub use error::SortError;
pub use merge::{is_sorted, is_sorted_by, sort, sort_by};
pub use raw::{is_sorted_raw, is_sorted_raw_by, sort_raw, sort_raw_by};
