//! Pointer/length entry points mirroring the slice API.
//!
//! These exist for call sites that hand over a raw buffer instead of a
//! slice. A null pointer paired with a nonzero length is rejected as
//! [`SortError::InvalidArgument`]; a null pointer with length zero, and any
//! pointer with length zero or one, is a no-op that never dereferences the
//! pointer.

use std::cmp::Ordering;
use std::slice;

use crate::error::SortError;
use crate::merge;

/// Sorts `len` elements behind `ptr` in place, ascending.
///
/// # Safety
///
/// Unless `ptr` is null, it must be valid for reads and writes of `len`
/// consecutive, initialized elements of `T`, properly aligned, and not
/// aliased by anything else for the duration of the call.
pub unsafe fn sort_raw<T>(ptr: *mut T, len: usize) -> Result<(), SortError>
where
    T: Ord,
{
    unsafe { sort_raw_by(ptr, len, |a, b| a.cmp(b)) }
}

/// Sorts `len` elements behind `ptr` in place with a comparator function.
///
/// # Safety
///
/// Same contract as [`sort_raw`].
pub unsafe fn sort_raw_by<T, F>(ptr: *mut T, len: usize, compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if ptr.is_null() {
        if len == 0 {
            return Ok(());
        }
        return Err(SortError::InvalidArgument { len });
    }
    if len < 2 {
        return Ok(());
    }

    merge::sort_by(unsafe { slice::from_raw_parts_mut(ptr, len) }, compare)
}

/// Returns `true` if the `len` elements behind `ptr` contain no inversion
/// under the natural order. Null pointers and lengths up to one are
/// trivially sorted.
///
/// # Safety
///
/// Unless `ptr` is null or `len < 2`, `ptr` must be valid for reads of
/// `len` consecutive, initialized elements of `T`, properly aligned.
pub unsafe fn is_sorted_raw<T>(ptr: *const T, len: usize) -> bool
where
    T: Ord,
{
    unsafe { is_sorted_raw_by(ptr, len, |a, b| a.cmp(b)) }
}

/// Comparator-taking variant of [`is_sorted_raw`].
///
/// # Safety
///
/// Same contract as [`is_sorted_raw`].
pub unsafe fn is_sorted_raw_by<T, F>(ptr: *const T, len: usize, compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if ptr.is_null() || len < 2 {
        return true;
    }

    merge::is_sorted_by(unsafe { slice::from_raw_parts(ptr, len) }, compare)
}
