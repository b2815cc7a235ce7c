//! Shared crest value types, errors, configuration primitives, and report envelopes.
#![warn(missing_docs)]

mod config;
mod error;
mod model;
mod reports;
mod series;

pub use config::{CrestConfig, CsvConfig, DuplicateDates, SortPolicy};
pub use error::CrestError;
pub use model::{ClosestPairResult, Point2D, SubarrayResult, SubrectangleResult};
pub use reports::{AnalysisReport, CombinedGain, Contribution, GainPeriod, SeriesAnalysis};
pub use series::{PriceRecord, PriceSeries};
