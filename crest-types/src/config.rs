//! Configuration types shared across the orchestrator and loaders.

use serde::{Deserialize, Serialize};

/// Tie handling for the chronological merge sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortPolicy {
    /// Take the left element when `left <= right`; equal keys keep their input order.
    #[default]
    Stable,
    /// Take the left element only when `left < right`. Equal keys that straddle a
    /// merge split come out right-first. Reproduces orderings produced by older
    /// exports of the same analysis.
    PreferRight,
}

/// What to do with a date that appears more than once in one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DuplicateDates {
    /// Keep the first record per date and drop later ones.
    #[default]
    FirstWins,
    /// Keep every record; the join pairs each matching record of one input with
    /// each matching record of the other, like a relational inner join.
    KeepAll,
}

/// How to read price histories from delimited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Header of the date column.
    pub date_column: String,
    /// Header of the closing price column. Values may carry `$` and `,`.
    pub close_column: String,
    /// Header of the traded volume column.
    pub volume_column: String,
    /// Field delimiter.
    pub delimiter: u8,
    /// Explicit date format tried before the built-in ones.
    pub date_format: Option<String>,
    /// Skip malformed rows instead of failing the whole load.
    pub skip_invalid: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            date_column: "Date".to_string(),
            close_column: "Close/Last".to_string(),
            volume_column: "Volume".to_string(),
            delimiter: b',',
            date_format: None,
            skip_invalid: false,
        }
    }
}

/// Global configuration for the `Crest` orchestrator.
///
/// The defaults join one record per date and keep ties in input order. Older
/// exports of this analysis paired every matching record and merged ties
/// right-first; `duplicates: KeepAll` with `sort_policy: PreferRight`
/// reproduces their alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrestConfig {
    /// Tie policy for ordering joined records by date.
    pub sort_policy: SortPolicy,
    /// Handling of repeated dates when joining the two inputs.
    pub duplicates: DuplicateDates,
    /// Layout of CSV inputs read by `analyze_files`.
    pub csv: CsvConfig,
}
