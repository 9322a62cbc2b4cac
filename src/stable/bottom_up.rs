//! Iterative merge sort. Produces the same result as [`super::top_down`] with constant call-stack
//! depth, merging adjacent runs of doubling width.

use super::top_down::merge;

sort_impl!("bottom_up_merge_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    tracing::trace!(len = v.len(), "bottom_up::sort");

    merge_sort(v);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let len = v.len();

    let mut width = 1;
    while width < len {
        tracing::debug!(width, len, "bottom_up merge pass");

        // A trailing chunk of at most `width` elements is already a sorted run.
        for chunk in v.chunks_mut(width * 2) {
            if chunk.len() <= width {
                continue;
            }

            let left = chunk[..width].to_vec();
            let right = chunk[width..].to_vec();
            merge(chunk, &left, &right);
        }

        width = width.saturating_mul(2);
    }
}
