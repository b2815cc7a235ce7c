//! Crest finds extremal patterns in a pair of daily price histories.
//!
//! Overview
//! - Aligns two histories on their common dates and orders them chronologically.
//! - Finds each series' maximum-gain window (1-D maximum subarray over daily changes).
//! - Finds the maximum combined window across both series (2-D maximum sub-rectangle).
//! - Finds, per series, the two trading days closest in (volume, close) space.
//! - Loads histories from CSV exports or any registered [`SeriesSource`].
//!
//! Key behaviors and trade-offs
//! - Ordering: `SortPolicy::Stable` keeps repeated dates in join order;
//!   `PreferRight` reproduces exports that ordered ties right-first.
//! - Duplicates: `DuplicateDates::FirstWins` keeps one record per date and input;
//!   `KeepAll` pairs every match, so one date can appear several times.
//! - Prices are parsed and differenced exactly as decimals; only the daily changes
//!   are handed to the floating-point algorithms.
//! - The combined window scans every column pair, so it is quadratic in the
//!   number of aligned days.
//!
//! Examples
//! Analysing two CSV exports:
//! ```rust,ignore
//! use crest::Crest;
//!
//! let crest = Crest::builder().build()?;
//! let report = crest.analyze_files("microsoft.csv", "apple.csv")?;
//! println!("{report}");
//! ```
//!
//! Looking symbols up through registered sources:
//! ```rust,ignore
//! use std::sync::Arc;
//! use crest::{Crest, CsvSource, SortPolicy};
//!
//! let files = CsvSource::new()
//!     .with_file("MSFT", "microsoft.csv")
//!     .with_file("AAPL", "apple.csv");
//! let crest = Crest::builder()
//!     .with_source(Arc::new(files))
//!     .sort_policy(SortPolicy::PreferRight)
//!     .build()?;
//! let report = crest.analyze_symbols("MSFT", "AAPL")?;
//! println!("{}", report.to_json()?);
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
/// CSV loading and price/date parsing.
pub mod load;

pub use core::{Crest, CrestBuilder};
pub use load::{CsvSource, load_csv, parse_date, parse_price};

pub use crest_core::{
    AlignedPair, AnalysisReport, ClosestPairResult, CombinedGain, Contribution, CrestConfig,
    CrestError, CsvConfig, Decimal, DuplicateDates, GainMatrix, GainPeriod, NaiveDate, Point2D,
    PriceRecord, PriceSeries, SeriesAnalysis, SeriesSource, SortPolicy, SubarrayResult,
    SubrectangleResult,
};
