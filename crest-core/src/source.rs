use crate::{CrestError, PriceSeries};

/// A provider of named price histories (files, fixtures, in-memory tables).
///
/// Implementations must return `CrestError::NotFound` for symbols they do not
/// know, so the orchestrator can fall through to the next registered source.
/// Any other error stops the lookup.
pub trait SeriesSource: Send + Sync {
    /// A stable identifier used in logs and error messages (e.g. "crest-csv").
    fn name(&self) -> &'static str;

    /// Human-friendly description of where the data comes from.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Load the full history for `symbol`, in whatever order the source holds it.
    ///
    /// # Errors
    /// `NotFound` for unknown symbols; `Io`/`Data` for unreadable or malformed data.
    fn series(&self, symbol: &str) -> Result<PriceSeries, CrestError>;
}

