//! Maximum-sum sub-rectangle via column compression.

use crate::algorithms::subarray;
use crate::{CrestError, GainMatrix, SubrectangleResult};

/// Find the contiguous sub-rectangle of `matrix` with the greatest total.
///
/// Every column pair `left <= right` is visited in order (`left` ascending, then
/// `right` ascending). For each pair the rows are compressed to their sums over
/// `[left, right]` and the best row range is found with the 1-D maximum
/// subarray. The best-so-far is replaced only by a strictly greater total, so
/// the first column pair reaching the maximum is reported.
///
/// Cost is O(C² · R log R) for R rows and C columns.
///
/// ```
/// use crest_core::{GainMatrix, max_subrectangle};
///
/// let m = GainMatrix::from_pair(&[1.0, -2.0, 3.0, -1.0], &[-1.0, 3.0, -2.0, 2.0]).unwrap();
/// let best = max_subrectangle(&m).unwrap();
/// assert_eq!(best.sum, 3.0);
/// assert_eq!((best.top, best.bottom, best.left, best.right), (0, 1, 0, 3));
/// ```
///
/// # Errors
/// Returns `InvariantViolation` if no rectangle was visited. [`GainMatrix`]
/// construction rules this out.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "crest_core::max_subrectangle",
        level = "debug",
        skip(matrix),
        fields(rows = matrix.rows(), cols = matrix.cols()),
    )
)]
pub fn max_subrectangle(matrix: &GainMatrix) -> Result<SubrectangleResult, CrestError> {
    let rows = matrix.rows();
    let cols = matrix.cols();

    let mut best: Option<SubrectangleResult> = None;
    let mut temp = vec![0.0f64; rows];
    for left in 0..cols {
        temp.iter_mut().for_each(|t| *t = 0.0);
        for right in left..cols {
            for (r, t) in temp.iter_mut().enumerate() {
                *t += matrix.get(r, right);
            }
            let strip = subarray::solve(&temp, 0, rows - 1);
            if best.is_none_or(|b| strip.sum > b.sum) {
                best = Some(SubrectangleResult {
                    top: strip.start,
                    bottom: strip.end,
                    left,
                    right,
                    sum: strip.sum,
                });
            }
        }
    }

    best.ok_or_else(|| CrestError::invariant("non-empty matrix produced no rectangle"))
}

/// Each row's sum over the columns `[left, right]`.
///
/// # Errors
/// Returns `InvalidInput` if the range is reversed or extends past the last column.
pub fn column_sums(matrix: &GainMatrix, left: usize, right: usize) -> Result<Vec<f64>, CrestError> {
    if left > right || right >= matrix.cols() {
        return Err(CrestError::invalid_input(format!(
            "column range [{left}, {right}] outside 0..{}",
            matrix.cols()
        )));
    }
    Ok((0..matrix.rows())
        .map(|r| (left..=right).map(|c| matrix.get(r, c)).sum::<f64>())
        .collect())
}
