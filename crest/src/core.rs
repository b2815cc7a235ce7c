use std::path::Path;
use std::sync::Arc;

use crest_core::{
    AlignedPair, AnalysisReport, ClosestPairResult, CombinedGain, Contribution, CrestConfig,
    CrestError, CsvConfig, DuplicateDates, GainMatrix, GainPeriod, NaiveDate, PriceRecord,
    PriceSeries, SeriesAnalysis, SeriesSource, SortPolicy, align_by_date, closest_pair,
    column_sums, first_differences, max_subarray, max_subrectangle,
};

use crate::load::load_csv;

/// Orchestrator that loads, aligns and analyses pairs of price histories.
pub struct Crest {
    pub(crate) sources: Vec<Arc<dyn SeriesSource>>,
    pub(crate) cfg: CrestConfig,
}

/// Builder for constructing a `Crest` orchestrator with custom configuration.
pub struct CrestBuilder {
    sources: Vec<Arc<dyn SeriesSource>>,
    cfg: CrestConfig,
}

impl Default for CrestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CrestBuilder {
    /// Create a new builder with default configuration and no sources.
    ///
    /// Sources are only needed for [`Crest::analyze_symbols`]; direct series and
    /// file analysis work without any.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: CrestConfig::default(),
        }
    }

    /// Register a history source.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is lookup priority: the first source that knows a
    ///   symbol serves it.
    /// - Duplicates are not deduplicated; avoid registering the same source twice.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Select how records sharing a date are ordered after the join.
    #[must_use]
    pub const fn sort_policy(mut self, policy: SortPolicy) -> Self {
        self.cfg.sort_policy = policy;
        self
    }

    /// Select how repeated dates inside one input are handled by the join.
    ///
    /// Behavior and trade-offs:
    /// - `FirstWins` keeps one record per date; every aligned day appears once.
    /// - `KeepAll` pairs every match like a relational inner join; a date repeated
    ///   in both inputs yields several aligned rows and zero-length gaps between them.
    #[must_use]
    pub const fn duplicate_dates(mut self, mode: DuplicateDates) -> Self {
        self.cfg.duplicates = mode;
        self
    }

    /// Layout used by [`Crest::analyze_files`].
    #[must_use]
    pub fn csv_config(mut self, cfg: CsvConfig) -> Self {
        self.cfg.csv = cfg;
        self
    }

    /// Replace the whole configuration, e.g. one deserialized from a file.
    #[must_use]
    pub fn config(mut self, cfg: CrestConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Crest` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a CSV column name is empty, two columns share a
    /// name, or the delimiter is a quote or line break.
    pub fn build(self) -> Result<Crest, CrestError> {
        let csv = &self.cfg.csv;
        let columns = [&csv.date_column, &csv.close_column, &csv.volume_column];
        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err(CrestError::invalid_input("csv column names must not be empty"));
        }
        if columns[0] == columns[1] || columns[0] == columns[2] || columns[1] == columns[2] {
            return Err(CrestError::invalid_input(format!(
                "csv columns must be distinct, got {columns:?}"
            )));
        }
        if matches!(csv.delimiter, b'"' | b'\n' | b'\r') {
            return Err(CrestError::invalid_input(format!(
                "unusable csv delimiter {:?}",
                char::from(csv.delimiter)
            )));
        }

        Ok(Crest {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

impl Crest {
    /// Start building a new `Crest` instance.
    ///
    /// ```
    /// use crest::{Crest, DuplicateDates, SortPolicy};
    ///
    /// let crest = Crest::builder()
    ///     .sort_policy(SortPolicy::Stable)
    ///     .duplicate_dates(DuplicateDates::FirstWins)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(crest.config().sort_policy, SortPolicy::Stable);
    /// ```
    #[must_use]
    pub fn builder() -> CrestBuilder {
        CrestBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CrestConfig {
        &self.cfg
    }

    /// Analyse two histories.
    ///
    /// Steps:
    /// 1. Inner-join on date and order chronologically.
    /// 2. Take exact day-over-day changes of each closing price series.
    /// 3. Find each series' maximum-gain window.
    /// 4. Stack both change series as rows and find the maximum combined window,
    ///    with each series' sum over its columns as that series' contribution.
    /// 5. Find each series' closest pair of (volume, close) points.
    ///
    /// # Errors
    /// - `InvalidInput` if the histories share fewer than two dates.
    /// - Errors of the underlying algorithms.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "crest::analyze",
            skip(self, first, second),
            fields(first = %first.symbol, second = %second.symbol),
        )
    )]
    pub fn analyze(
        &self,
        first: &PriceSeries,
        second: &PriceSeries,
    ) -> Result<AnalysisReport, CrestError> {
        let aligned = align_by_date(first, second, self.cfg.duplicates, self.cfg.sort_policy)?;
        if aligned.len() < 2 {
            return Err(CrestError::invalid_input(format!(
                "{} and {} share {} date(s); at least 2 are needed",
                first.symbol,
                second.symbol,
                aligned.len()
            )));
        }

        let first_changes = first_differences(&closes(&aligned.first))?;
        let second_changes = first_differences(&closes(&aligned.second))?;

        let first_gain = gain_period(&aligned, &first_changes)?;
        let second_gain = gain_period(&aligned, &second_changes)?;

        let matrix = GainMatrix::from_pair(&first_changes, &second_changes)?;
        let rect = max_subrectangle(&matrix)?;
        let sums = column_sums(&matrix, rect.left, rect.right)?;
        let (start_date, end_date) = window_dates(&aligned.dates, rect.left, rect.right)?;
        let combined = CombinedGain {
            top: rect.top,
            bottom: rect.bottom,
            left: rect.left,
            right: rect.right,
            start_date,
            end_date,
            gain: rect.sum,
            contributions: [&first.symbol, &second.symbol]
                .into_iter()
                .zip(sums)
                .map(|(symbol, sum)| Contribution {
                    symbol: symbol.clone(),
                    sum,
                })
                .collect(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            aligned = aligned.len(),
            combined_gain = combined.gain,
            "gain windows found"
        );

        Ok(AnalysisReport {
            aligned_days: aligned.len(),
            first: SeriesAnalysis {
                symbol: first.symbol.clone(),
                gain: first_gain,
                closest: closest_in(&aligned.first)?,
            },
            second: SeriesAnalysis {
                symbol: second.symbol.clone(),
                gain: second_gain,
                closest: closest_in(&aligned.second)?,
            },
            combined,
        })
    }

    /// Fetch both symbols from the registered sources and analyse them.
    ///
    /// Sources are tried in registration order. A `NotFound` falls through to
    /// the next source; any other error is returned as is.
    ///
    /// # Errors
    /// - `InvalidInput` if no source is registered.
    /// - `NotFound` if no source knows a symbol.
    /// - Source and analysis errors.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "crest::analyze_symbols", skip(self))
    )]
    pub fn analyze_symbols(&self, first: &str, second: &str) -> Result<AnalysisReport, CrestError> {
        let a = self.fetch(first)?;
        let b = self.fetch(second)?;
        self.analyze(&a, &b)
    }

    /// Load two CSV files with the configured layout and analyse them.
    ///
    /// Series are named after the file stems.
    ///
    /// # Errors
    /// Loading errors (see [`crate::load_csv`]) and analysis errors.
    pub fn analyze_files(
        &self,
        first: impl AsRef<Path>,
        second: impl AsRef<Path>,
    ) -> Result<AnalysisReport, CrestError> {
        let (first, second) = (first.as_ref(), second.as_ref());
        let a = load_csv(first, &stem(first), &self.cfg.csv)?;
        let b = load_csv(second, &stem(second), &self.cfg.csv)?;
        self.analyze(&a, &b)
    }

    fn fetch(&self, symbol: &str) -> Result<PriceSeries, CrestError> {
        if self.sources.is_empty() {
            return Err(CrestError::invalid_input(
                "no sources registered; add at least one via with_source(...)",
            ));
        }
        for source in &self.sources {
            match source.series(symbol) {
                Ok(series) => return Ok(series),
                Err(CrestError::NotFound { .. }) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        source = source.name(),
                        symbol,
                        "symbol not found; trying next source"
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Err(CrestError::not_found(format!("series for {symbol}")))
    }
}

fn closes(records: &[PriceRecord]) -> Vec<crest_core::Decimal> {
    records.iter().map(|r| r.close).collect()
}

/// Close dates bounding the change window `[start, end]`.
fn window_dates(
    dates: &[NaiveDate],
    start: usize,
    end: usize,
) -> Result<(NaiveDate, NaiveDate), CrestError> {
    match (dates.get(start), dates.get(end + 1)) {
        (Some(s), Some(e)) => Ok((*s, *e)),
        _ => Err(CrestError::invariant(format!(
            "window [{start}, {end}] outside {} dates",
            dates.len()
        ))),
    }
}

fn gain_period(aligned: &AlignedPair, changes: &[f64]) -> Result<GainPeriod, CrestError> {
    let best = max_subarray(changes)?;
    let (start_date, end_date) = window_dates(&aligned.dates, best.start, best.end)?;
    Ok(GainPeriod {
        start: best.start,
        end: best.end,
        start_date,
        end_date,
        gain: best.sum,
    })
}

fn closest_in(records: &[PriceRecord]) -> Result<ClosestPairResult, CrestError> {
    let points = records
        .iter()
        .map(PriceRecord::point)
        .collect::<Result<Vec<_>, _>>()?;
    closest_pair(&points)
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}
