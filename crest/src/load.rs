use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use crest_core::{CrestError, CsvConfig, Decimal, PriceRecord, PriceSeries, SeriesSource};

/// Formats tried after the configured one, in order.
const DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

pub(crate) fn io_error(path: &Path, e: &std::io::Error) -> CrestError {
    CrestError::Io(format!("{}: {e}", path.display()))
}

pub(crate) fn csv_error(path: &Path, e: &csv::Error) -> CrestError {
    match e.kind() {
        csv::ErrorKind::Io(io) => io_error(path, io),
        _ => CrestError::data(format!("{}: {e}", path.display())),
    }
}

/// Parse a closing price such as `"$1,234.50"` exactly.
///
/// Surrounding whitespace, `$` signs and `,` thousands separators are removed
/// before parsing.
///
/// # Errors
/// Returns `Data` if what remains is not a decimal number.
pub fn parse_price(raw: &str) -> Result<Decimal, CrestError> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    Decimal::from_str(cleaned.trim())
        .map_err(|e| CrestError::data(format!("price '{raw}': {e}")))
}

/// Parse a calendar date, trying `format` first and then the common layouts
/// `%m/%d/%Y`, `%Y-%m-%d`, `%Y/%m/%d`, `%d-%m-%Y`.
///
/// # Errors
/// Returns `Data` if no format matches.
pub fn parse_date(raw: &str, format: Option<&str>) -> Result<NaiveDate, CrestError> {
    let s = raw.trim();
    format
        .into_iter()
        .chain(DATE_FORMATS)
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| CrestError::data(format!("could not parse date '{raw}'")))
}

fn parse_volume(raw: &str) -> Result<u64, CrestError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<u64>()
        .map_err(|e| CrestError::data(format!("volume '{raw}': {e}")))
}

/// Header positions of the three columns the analysis reads.
struct Columns {
    date: usize,
    close: usize,
    volume: usize,
}

impl Columns {
    fn locate(headers: &StringRecord, cfg: &CsvConfig) -> Result<Self, CrestError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| CrestError::data(format!("missing column '{name}'")))
        };
        Ok(Self {
            date: find(&cfg.date_column)?,
            close: find(&cfg.close_column)?,
            volume: find(&cfg.volume_column)?,
        })
    }

    fn record(&self, row: &StringRecord, cfg: &CsvConfig) -> Result<PriceRecord, CrestError> {
        let field = |i: usize| {
            row.get(i)
                .ok_or_else(|| CrestError::data(format!("row has {} fields", row.len())))
        };
        Ok(PriceRecord::new(
            parse_date(field(self.date)?, cfg.date_format.as_deref())?,
            parse_price(field(self.close)?)?,
            parse_volume(field(self.volume)?)?,
        ))
    }
}

/// Load a price history from a delimited text file.
///
/// Columns are found by header name (see [`CsvConfig`]); other columns are
/// ignored. Records keep file order. With `skip_invalid` set, rows that fail to
/// parse are skipped instead of failing the load.
///
/// # Errors
/// - `Io` if the file cannot be opened or read.
/// - `Data` for a missing column or, unless `skip_invalid` is set, a malformed row.
/// - `InvalidInput` if no record was loaded.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "crest::load_csv",
        skip(path, cfg),
        fields(path = %path.as_ref().display()),
    )
)]
pub fn load_csv(
    path: impl AsRef<Path>,
    symbol: &str,
    cfg: &CsvConfig,
) -> Result<PriceSeries, CrestError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(cfg.delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, &e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, &e))?.clone();
    let columns = Columns::locate(&headers, cfg)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (line, row) in reader.records().enumerate() {
        let parsed = row
            .map_err(|e| csv_error(path, &e))
            .and_then(|row| columns.record(&row, cfg));
        match parsed {
            Ok(r) => records.push(r),
            Err(CrestError::Io(msg)) => return Err(CrestError::Io(msg)),
            Err(e) if cfg.skip_invalid => {
                #[cfg(feature = "tracing")]
                tracing::debug!(row = line + 1, error = %e, "skipping row");
                #[cfg(not(feature = "tracing"))]
                let _ = (line, e);
                skipped += 1;
            }
            Err(e) => {
                return Err(CrestError::data(format!(
                    "{} row {}: {e}",
                    path.display(),
                    line + 1
                )));
            }
        }
    }

    #[cfg(feature = "tracing")]
    if skipped > 0 {
        tracing::warn!(skipped, "skipped invalid rows");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = skipped;

    if records.is_empty() {
        return Err(CrestError::invalid_input(format!(
            "{} holds no price records",
            path.display()
        )));
    }
    Ok(PriceSeries::new(symbol, records))
}

/// A [`SeriesSource`] backed by one CSV file per symbol.
#[derive(Debug, Clone, Default)]
pub struct CsvSource {
    files: HashMap<String, PathBuf>,
    cfg: CsvConfig,
}

impl CsvSource {
    /// Create an empty source using the default CSV layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `symbol` to the file at `path`. A later mapping for the same symbol
    /// replaces the earlier one.
    #[must_use]
    pub fn with_file(mut self, symbol: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.files.insert(symbol.into(), path.into());
        self
    }

    /// Use `cfg` to read every file of this source.
    #[must_use]
    pub fn with_config(mut self, cfg: CsvConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Symbols this source can load, sorted.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.files.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }
}

impl SeriesSource for CsvSource {
    fn name(&self) -> &'static str {
        "crest-csv"
    }

    fn vendor(&self) -> &'static str {
        "CSV files"
    }

    fn series(&self, symbol: &str) -> Result<PriceSeries, CrestError> {
        let path = self
            .files
            .get(symbol)
            .ok_or_else(|| CrestError::not_found(format!("series for {symbol}")))?;
        load_csv(path, symbol, &self.cfg)
    }
}
