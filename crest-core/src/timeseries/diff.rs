use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::CrestError;

/// Period-over-period changes: `out[i] = values[i + 1] - values[i]`.
///
/// Subtraction is exact in `Decimal`; each difference is converted to `f64`
/// afterwards so rounding never accumulates across the series.
///
/// # Errors
/// - `InvalidInput` for fewer than two values.
/// - `InvariantViolation` if a difference overflows or has no `f64` form.
pub fn first_differences(values: &[Decimal]) -> Result<Vec<f64>, CrestError> {
    if values.len() < 2 {
        return Err(CrestError::invalid_input(format!(
            "first differences need at least 2 values, got {}",
            values.len()
        )));
    }
    values
        .windows(2)
        .map(|w| {
            w[1].checked_sub(w[0])
                .and_then(|d| d.to_f64())
                .ok_or_else(|| {
                    CrestError::invariant(format!("difference {} - {} overflows", w[1], w[0]))
                })
        })
        .collect()
}
