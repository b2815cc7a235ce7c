//! Merge sort producing a permutation of caller-supplied labels.

use core::cmp::Ordering;

use crate::{CrestError, SortPolicy};

/// Sort `indices` by the keys in `values` and return the reordered labels.
///
/// `values[i]` is the key carried by label `indices[i]`; the labels need not be
/// positions. The result lists every label once, ordered so that the keys are
/// non-decreasing. Ties follow `policy`:
///
/// - [`SortPolicy::Stable`]: equal keys keep their input order.
/// - [`SortPolicy::PreferRight`]: during a merge the left element wins only when
///   strictly smaller, so equal keys straddling a split come out right-first.
///
/// Top-down, split at `n / 2`, merging through one scratch buffer.
///
/// ```
/// use crest_core::{SortPolicy, merge_sort_indices};
///
/// let days = [3, 1, 2, 1];
/// let order = merge_sort_indices(&days, &[0, 1, 2, 3], SortPolicy::Stable).unwrap();
/// assert_eq!(order, vec![1, 3, 2, 0]);
///
/// let order = merge_sort_indices(&days, &[0, 1, 2, 3], SortPolicy::PreferRight).unwrap();
/// assert_eq!(order, vec![3, 1, 2, 0]);
/// ```
///
/// # Errors
/// - `InvalidInput` if `values` and `indices` differ in length.
/// - `InvariantViolation` if two keys are incomparable (e.g. NaN).
pub fn merge_sort_indices<K: PartialOrd>(
    values: &[K],
    indices: &[usize],
    policy: SortPolicy,
) -> Result<Vec<usize>, CrestError> {
    if values.len() != indices.len() {
        return Err(CrestError::invalid_input(format!(
            "sort keys and labels differ in length: {} vs {}",
            values.len(),
            indices.len()
        )));
    }
    if values.len() <= 1 {
        return Ok(indices.to_vec());
    }

    // Sort positions into `values`, then map them to labels.
    let mut order: Vec<usize> = (0..values.len()).collect();
    let mut scratch = vec![0usize; values.len()];
    sort_range(values, &mut order, &mut scratch, policy)?;
    Ok(order.into_iter().map(|pos| indices[pos]).collect())
}

/// [`merge_sort_indices`] with labels `0..values.len()`.
///
/// # Errors
/// Returns `InvariantViolation` if two keys are incomparable.
pub fn argsort<K: PartialOrd>(values: &[K], policy: SortPolicy) -> Result<Vec<usize>, CrestError> {
    let labels: Vec<usize> = (0..values.len()).collect();
    merge_sort_indices(values, &labels, policy)
}

fn sort_range<K: PartialOrd>(
    values: &[K],
    order: &mut [usize],
    scratch: &mut [usize],
    policy: SortPolicy,
) -> Result<(), CrestError> {
    let n = order.len();
    if n <= 1 {
        return Ok(());
    }
    let mid = n / 2;
    {
        let (lo, hi) = order.split_at_mut(mid);
        let (lo_s, hi_s) = scratch.split_at_mut(mid);
        sort_range(values, lo, lo_s, policy)?;
        sort_range(values, hi, hi_s, policy)?;
    }
    scratch.copy_from_slice(order);
    merge(values, &scratch[..mid], &scratch[mid..], order, policy)
}

fn merge<K: PartialOrd>(
    values: &[K],
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
    policy: SortPolicy,
) -> Result<(), CrestError> {
    let (mut i, mut j, mut k) = (0usize, 0usize, 0usize);
    while i < left.len() && j < right.len() {
        let ord = values[left[i]]
            .partial_cmp(&values[right[j]])
            .ok_or_else(|| {
                CrestError::invariant(format!(
                    "incomparable sort keys at positions {} and {}",
                    left[i], right[j]
                ))
            })?;
        let take_left = match policy {
            SortPolicy::Stable => ord != Ordering::Greater,
            SortPolicy::PreferRight => ord == Ordering::Less,
        };
        if take_left {
            out[k] = left[i];
            i += 1;
        } else {
            out[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    for &p in &left[i..] {
        out[k] = p;
        k += 1;
    }
    for &p in &right[j..] {
        out[k] = p;
        k += 1;
    }
    Ok(())
}
