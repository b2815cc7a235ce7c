//! Report envelopes produced by the orchestrator.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CrestError;
use crate::model::ClosestPairResult;

/// Maximum-gain window of a single series.
///
/// `start`/`end` index the first-difference series. The window spans the
/// closing prices from `start_date` (index `start`) to `end_date` (index `end + 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainPeriod {
    /// First difference index in the window.
    pub start: usize,
    /// Last difference index in the window (inclusive).
    pub end: usize,
    /// Date of the close the window starts from.
    pub start_date: NaiveDate,
    /// Date of the close the window ends on.
    pub end_date: NaiveDate,
    /// Cumulative price change over the window.
    pub gain: f64,
}

/// One series' share of the combined gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Series symbol.
    pub symbol: String,
    /// Sum of the series' differences over the combined window.
    pub sum: f64,
}

/// Maximum-gain window across both series at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedGain {
    /// First matrix row inside the best rectangle.
    pub top: usize,
    /// Last matrix row inside the best rectangle.
    pub bottom: usize,
    /// First difference index in the window.
    pub left: usize,
    /// Last difference index in the window (inclusive).
    pub right: usize,
    /// Date of the close the window starts from.
    pub start_date: NaiveDate,
    /// Date of the close the window ends on.
    pub end_date: NaiveDate,
    /// Total of the best rectangle.
    pub gain: f64,
    /// Per-series sums over `[left, right]`, in input order.
    pub contributions: Vec<Contribution>,
}

/// Per-series results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalysis {
    /// Series symbol.
    pub symbol: String,
    /// Maximum single-series gain window.
    pub gain: GainPeriod,
    /// Closest (volume, close) pair within this series only.
    pub closest: ClosestPairResult,
}

/// Complete result of analysing two aligned histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of dates present in both inputs.
    pub aligned_days: usize,
    /// First input series.
    pub first: SeriesAnalysis,
    /// Second input series.
    pub second: SeriesAnalysis,
    /// Combined two-series window.
    pub combined: CombinedGain,
}

impl AnalysisReport {
    /// The series with the larger individual gain. Ties go to the second series.
    #[must_use]
    pub fn leader(&self) -> &SeriesAnalysis {
        if self.first.gain.gain > self.second.gain.gain {
            &self.first
        } else {
            &self.second
        }
    }

    /// Date range a chart should highlight: the combined window.
    #[must_use]
    pub const fn highlight(&self) -> (NaiveDate, NaiveDate) {
        (self.combined.start_date, self.combined.end_date)
    }

    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `Data` if serialization fails (non-finite numbers cannot occur
    /// in a report built by the orchestrator).
    pub fn to_json(&self) -> Result<String, CrestError> {
        serde_json::to_string_pretty(self).map_err(|e| CrestError::data(e.to_string()))
    }
}

/// Format `value` with `decimals` fractional digits and `,` thousands separators.
fn grouped(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    let zero = raw.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

impl fmt::Display for ClosestPairResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Volume 1: {}, Price 1: {}",
            grouped(self.a.x, 0),
            grouped(self.a.y, 2)
        )?;
        writeln!(
            f,
            "Volume 2: {}, Price 2: {}",
            grouped(self.b.x, 0),
            grouped(self.b.y, 2)
        )?;
        write!(f, "Distance: {}", grouped(self.distance, 2))
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (&self.first, &self.second);
        let c = &self.combined;
        writeln!(f, "Stocks contributing: {} and {}", a.symbol, b.symbol)?;
        writeln!(
            f,
            "Maximum combined gain period: Start Date: {}, End Date: {}",
            c.start_date, c.end_date
        )?;
        writeln!(f, "Maximum combined gain: {:.2}", c.gain)?;
        writeln!(f)?;
        for contrib in &c.contributions {
            writeln!(
                f,
                "{} contribution during this period: {:.2}",
                contrib.symbol, contrib.sum
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Individual max gain:")?;
        for s in [a, b] {
            writeln!(
                f,
                "{} max gain period: Start Date: {}, End Date: {}",
                s.symbol, s.gain.start_date, s.gain.end_date
            )?;
            writeln!(f, "{} max gain: {:.2}", s.symbol, s.gain.gain)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{} had a larger individual maximum gain.",
            self.leader().symbol
        )?;
        for s in [a, b] {
            writeln!(f)?;
            writeln!(f, "{} Closest Pairs:", s.symbol)?;
            writeln!(f, "{}", s.closest)?;
        }
        Ok(())
    }
}
