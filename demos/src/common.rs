use std::path::PathBuf;
use std::sync::Arc;

use crest::{CsvSource, SeriesSource};
use crest_mock::MockSource;

/// Symbols the demos compare, from `CREST_DEMOS_SYMBOLS` ("MSFT,AAPL" by default).
#[must_use]
pub fn symbols() -> (String, String) {
    let raw = std::env::var("CREST_DEMOS_SYMBOLS").unwrap_or_default();
    match raw.split_once(',') {
        Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
            (a.trim().to_string(), b.trim().to_string())
        }
        _ => ("MSFT".to_string(), "AAPL".to_string()),
    }
}

/// Return the sources for demos, in priority order.
///
/// With `CREST_DEMOS_USE_MOCK` set only the fixture source is used. Otherwise
/// `<CREST_DEMOS_DATA_DIR>/<SYMBOL>.csv` files (default dir `data`) are tried
/// first and the fixtures serve whatever is missing.
#[must_use]
pub fn get_sources() -> Vec<Arc<dyn SeriesSource>> {
    let mock: Arc<dyn SeriesSource> = Arc::new(MockSource::new());
    if std::env::var("CREST_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        return vec![mock];
    }

    let dir = std::env::var("CREST_DEMOS_DATA_DIR").map_or_else(|_| PathBuf::from("data"), PathBuf::from);
    let (a, b) = symbols();
    let mut files = CsvSource::new();
    for sym in [a, b] {
        let path = dir.join(format!("{sym}.csv"));
        if path.is_file() {
            files = files.with_file(sym, path);
        }
    }
    let files: Arc<dyn SeriesSource> = Arc::new(files);
    vec![files, mock]
}

/// A `Crest` builder with the demo sources registered.
#[must_use]
pub fn builder() -> crest::CrestBuilder {
    get_sources()
        .into_iter()
        .fold(crest::Crest::builder(), crest::CrestBuilder::with_source)
}
