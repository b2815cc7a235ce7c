use serde::{Deserialize, Serialize};

use crate::CrestError;

/// Rectangular matrix of finite per-period changes, one row per series.
///
/// Construction validates the shape, so every `GainMatrix` has at least one row,
/// at least one column, rows of equal length, and only finite cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct GainMatrix {
    rows: Vec<Vec<f64>>,
}

impl GainMatrix {
    /// Build a matrix from its rows.
    ///
    /// # Errors
    /// Returns `InvalidInput` for zero rows, zero columns, rows of unequal
    /// length, or a non-finite cell.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, CrestError> {
        let Some(first) = rows.first() else {
            return Err(CrestError::invalid_input("matrix has no rows"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(CrestError::invalid_input("matrix has no columns"));
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(CrestError::invalid_input(format!(
                    "row {r} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(CrestError::invalid_input(format!(
                    "non-finite value {} at row {r}, column {c}",
                    row[c]
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Stack two equal-length series as a 2-row matrix.
    ///
    /// # Errors
    /// Same conditions as [`GainMatrix::new`].
    pub fn from_pair(first: &[f64], second: &[f64]) -> Result<Self, CrestError> {
        Self::new(vec![first.to_vec(), second.to_vec()])
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Row `r`, if present.
    #[must_use]
    pub fn row(&self, r: usize) -> Option<&[f64]> {
        self.rows.get(r).map(Vec::as_slice)
    }

    /// Cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is out of bounds.
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }
}

impl TryFrom<Vec<Vec<f64>>> for GainMatrix {
    type Error = CrestError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<GainMatrix> for Vec<Vec<f64>> {
    fn from(m: GainMatrix) -> Self {
        m.rows
    }
}
