//! The merge sort itself: slice entry points, the recursive driver, the
//! two-buffer merge routine and the inversion-free predicate.

use std::cmp::Ordering;
use std::mem::size_of;
use std::ptr;

use crate::error::SortError;

/// Sorts the slice in place, ascending.
///
/// This sort is stable (i.e., does not reorder equal elements) and
/// *O*(*n* \* log(*n*)) worst-case, with *O*(*n*) auxiliary space for the
/// merge buffers. Empty and single-element slices are no-ops.
///
/// The only possible error is [`SortError::ResourceExhaustion`], reported
/// when a merge buffer cannot be allocated; the slice then still holds a
/// permutation of its original elements.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// merge_sort_rs::sort(&mut v).unwrap();
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b))
}

/// Sorts the slice in place with a comparator function.
///
/// This sort is stable (i.e., does not reorder elements the comparator
/// ranks equal) and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator must induce a strict weak ordering on the elements. If it
/// does not, the resulting order is unspecified, but the call stays
/// memory-safe and the slice keeps holding every element exactly once.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// merge_sort_rs::sort_by(&mut v, |a, b| a.cmp(b)).unwrap();
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// merge_sort_rs::sort_by(&mut v, |a, b| b.cmp(a)).unwrap();
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

/// Returns `true` if the slice contains no inversion under the natural
/// order.
///
/// Empty and single-element slices are always sorted.
#[inline]
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    no_inversions(v, &mut |a, b| a.lt(b))
}

/// Returns `true` if the slice contains no inversion under `compare`, that
/// is, no adjacent pair where the right element ranks strictly less than
/// the left one.
///
/// This is a pure, read-only check; equal-ranking neighbors are accepted
/// in any order.
#[inline]
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    no_inversions(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn no_inversions<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|pair| !is_less(&pair[1], &pair[0]))
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return Ok(());
    }

    sort_span(v, is_less)
}

/// Recursive driver: splits the span at its midpoint, sorts both halves,
/// then merges them. Spans shorter than two elements are already sorted and
/// terminate the recursion.
fn sort_span<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    // Sub-slice midpoints cannot overflow, unlike `(low + high) / 2` on
    // absolute indices.
    let mid = len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        sort_span(left, is_less)?;
        sort_span(right, is_less)?;
    }

    merge(v, mid, is_less)
}

/// Merges the adjacent sorted runs `v[..mid]` and `v[mid..]` into one sorted
/// run, preferring elements of the left run on ties.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    // One scratch buffer per run. Both vectors keep length 0 so the shallow
    // copies inside never have their dtors run; ownership of the copies is
    // tracked by `hole` below. The backing memory itself is released when
    // the vectors go out of scope, on every exit path.
    let mut left_buf: Vec<T> = Vec::new();
    left_buf.try_reserve_exact(mid)?;
    let mut right_buf: Vec<T> = Vec::new();
    right_buf.try_reserve_exact(len - mid)?;

    // SAFETY: the buffers hold at least `mid` resp. `len - mid` elements of
    // spare capacity and cannot alias `v`. All reads below are from
    // initialized elements, and every element is written back into `v`
    // exactly once, either by the merge loop or by `hole`'s drop.
    unsafe {
        let src = v.as_mut_ptr();
        let left = left_buf.as_mut_ptr();
        let right = right_buf.as_mut_ptr();
        ptr::copy_nonoverlapping(src, left, mid);
        ptr::copy_nonoverlapping(src.add(mid), right, len - mid);

        // Every element now lives in exactly one of the two buffers and `v`
        // is one big hole. If `is_less` panics, dropping `hole` copies
        // whatever has not been merged yet back into `v`, so the caller
        // still holds each of its elements exactly once.
        let mut hole = MergeHole {
            left,
            left_end: left.add(mid),
            right,
            right_end: right.add(len - mid),
            dest: src,
        };

        while hole.left < hole.left_end && hole.right < hole.right_end {
            // `!is_less(right, left)` keeps the left element on ties, which
            // is what makes the merge stable.
            if !is_less(&*hole.right, &*hole.left) {
                ptr::copy_nonoverlapping(hole.left, hole.dest, 1);
                hole.left = hole.left.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.right, hole.dest, 1);
                hole.right = hole.right.add(1);
            }
            hole.dest = hole.dest.add(1);
        }

        // `hole` gets dropped here and flushes the remainder of whichever
        // run is not yet exhausted into the tail of the hole, in order.
    }

    Ok(())
}

// When dropped, copies the not-yet-merged tails of both runs into `dest`.
// This runs on normal exit, where at most one run is non-empty, as well as
// on unwind out of the comparator.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: the source ranges hold initialized elements that appear
        // nowhere else, and the hole at `dest` has exactly enough room for
        // both of them.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
