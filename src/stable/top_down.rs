//! Recursive top-down merge sort.
//!
//! Each level copies its two halves out into owned partitions, sorts them independently and merges
//! them back into the caller's slice. Ties are resolved in favor of the left partition, which makes
//! the sort stable.

use crate::MergeError;

sort_impl!("top_down_merge_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    tracing::trace!(len = v.len(), "top_down::sort");

    merge_sort(v);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    // Left gets the smaller half for odd lengths.
    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    merge_sort(&mut left);
    merge_sort(&mut right);

    merge(v, &left, &right);
}

/// Writes the stable, ascending union of `left` and `right` into `dst`, starting at index 0.
///
/// Both inputs must already be sorted. On equal elements the one from `left` is written first.
///
/// # Panics
///
/// Panics if `dst.len() != left.len() + right.len()`. Use [`try_merge`] to get an error instead.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn merge<T>(dst: &mut [T], left: &[T], right: &[T])
where
    T: Ord + Clone,
{
    assert_eq!(
        dst.len(),
        left.len() + right.len(),
        "merge destination length must equal the combined input length"
    );

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        // Non-strict, so ties take from the left.
        if left[i] <= right[j] {
            dst[k] = left[i].clone();
            i += 1;
        } else {
            dst[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    // At most one of these is non-empty.
    for (slot, val) in dst[k..].iter_mut().zip(left[i..].iter().chain(&right[j..])) {
        slot.clone_from(val);
    }
}

/// Like [`merge`], but reports a length mismatch instead of panicking. `dst` is left untouched in
/// that case.
pub fn try_merge<T>(dst: &mut [T], left: &[T], right: &[T]) -> Result<(), MergeError>
where
    T: Ord + Clone,
{
    if dst.len() != left.len() + right.len() {
        return Err(MergeError::LengthMismatch {
            dst: dst.len(),
            left: left.len(),
            right: right.len(),
        });
    }

    merge(dst, left, right);
    Ok(())
}
