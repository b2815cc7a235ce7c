//! Mock history sources for tests and demos.
//!
//! - [`MockSource`]: a small fixed set of daily histories.
//! - [`RandomWalkSource`] / [`random_walk`]: reproducible synthetic histories of any length.
//! - [`DynamicMockSource`]: per-symbol behavior scripted by a controller.

use crest_core::{CrestError, PriceSeries, SeriesSource};

mod dynamic;
mod fixtures;
mod walk;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use walk::{RandomWalkSource, random_walk};

/// Mock source for CI-safe demos. Serves deterministic data from static fixtures.
///
/// Knows `MSFT`, `AAPL` and `GOOG`. The symbol `FAIL` yields a `Data` error;
/// anything else is `NotFound`.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create the fixture source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Symbols with fixture data.
    #[must_use]
    pub const fn symbols() -> &'static [&'static str] {
        &["AAPL", "GOOG", "MSFT"]
    }
}

impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "crest-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn series(&self, symbol: &str) -> Result<PriceSeries, CrestError> {
        if symbol == "FAIL" {
            return Err(CrestError::data("forced failure: series"));
        }
        fixtures::history::by_symbol(symbol)
            .ok_or_else(|| CrestError::not_found(format!("series for {symbol}")))
    }
}
