//! Divide-and-conquer maximum subarray.

use crate::{CrestError, SubarrayResult};

/// Find the contiguous range of `series` with the greatest sum.
///
/// The range `[low, high]` is split at `(low + high) / 2`; the best range is the
/// best of the left half, the right half, and the best range crossing the
/// midpoint. Ties prefer left, then right, then crossing. When every element is
/// negative the result is the single largest element.
///
/// ```
/// use crest_core::max_subarray;
///
/// let best = max_subarray(&[2.0, -1.0, 2.0, 3.0, -9.0, 4.0]).unwrap();
/// assert_eq!((best.start, best.end, best.sum), (0, 3, 6.0));
/// ```
///
/// # Errors
/// Returns `InvalidInput` if `series` is empty or holds a non-finite value.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "crest_core::max_subarray",
        level = "trace",
        skip(series),
        fields(len = series.len()),
    )
)]
pub fn max_subarray(series: &[f64]) -> Result<SubarrayResult, CrestError> {
    if series.is_empty() {
        return Err(CrestError::invalid_input("maximum subarray of an empty series"));
    }
    if let Some(i) = series.iter().position(|v| !v.is_finite()) {
        return Err(CrestError::invalid_input(format!(
            "non-finite value {} at index {i}",
            series[i]
        )));
    }
    Ok(solve(series, 0, series.len() - 1))
}

pub(crate) fn solve(arr: &[f64], low: usize, high: usize) -> SubarrayResult {
    if low == high {
        return SubarrayResult {
            start: low,
            end: high,
            sum: arr[low],
        };
    }
    let mid = low + (high - low) / 2;
    let left = solve(arr, low, mid);
    let right = solve(arr, mid + 1, high);
    let cross = crossing(arr, low, mid, high);

    if left.sum >= right.sum && left.sum >= cross.sum {
        left
    } else if right.sum >= left.sum && right.sum >= cross.sum {
        right
    } else {
        cross
    }
}

/// Best range that contains both `mid` and `mid + 1`.
fn crossing(arr: &[f64], low: usize, mid: usize, high: usize) -> SubarrayResult {
    let mut left_sum = f64::NEG_INFINITY;
    let mut total = 0.0;
    let mut max_left = mid;
    for i in (low..=mid).rev() {
        total += arr[i];
        if total > left_sum {
            left_sum = total;
            max_left = i;
        }
    }

    let mut right_sum = f64::NEG_INFINITY;
    total = 0.0;
    let mut max_right = mid + 1;
    for (j, v) in arr.iter().enumerate().take(high + 1).skip(mid + 1) {
        total += v;
        if total > right_sum {
            right_sum = total;
            max_right = j;
        }
    }

    SubarrayResult {
        start: max_left,
        end: max_right,
        sum: left_sum + right_sum,
    }
}
