//! Re-export of foundational types from `crest-types`.
// Consolidated re-exports so downstream crates can depend on `crest-core` only

pub use crest_types::{
    AnalysisReport, ClosestPairResult, CombinedGain, Contribution, CrestConfig, CrestError,
    CsvConfig, DuplicateDates, GainPeriod, Point2D, PriceRecord, PriceSeries, SeriesAnalysis,
    SortPolicy, SubarrayResult, SubrectangleResult,
};

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
