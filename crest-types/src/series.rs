//! Dated price histories.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::CrestError;
use crate::model::Point2D;

/// One trading day of a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Trading date.
    pub date: NaiveDate,
    /// Closing price, parsed exactly.
    pub close: Decimal,
    /// Traded volume.
    pub volume: u64,
}

impl PriceRecord {
    /// Create a record.
    #[must_use]
    pub const fn new(date: NaiveDate, close: Decimal, volume: u64) -> Self {
        Self {
            date,
            close,
            volume,
        }
    }

    /// The record as a (volume, close) point.
    ///
    /// # Errors
    /// Returns `InvariantViolation` if the closing price has no `f64` representation.
    pub fn point(&self) -> Result<Point2D, CrestError> {
        let y = self.close.to_f64().ok_or_else(|| {
            CrestError::invariant(format!("close {} on {} overflows f64", self.close, self.date))
        })?;
        // u64 -> f64 is lossy above 2^53; volumes never get there.
        #[allow(clippy::cast_precision_loss)]
        let x = self.volume as f64;
        Ok(Point2D::new(x, y))
    }
}

/// A named history in whatever order it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Symbol or label of the instrument.
    pub symbol: String,
    /// Records, not necessarily sorted.
    pub records: Vec<PriceRecord>,
}

impl PriceSeries {
    /// Create a named series.
    pub fn new(symbol: impl Into<String>, records: Vec<PriceRecord>) -> Self {
        Self {
            symbol: symbol.into(),
            records,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the series holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
