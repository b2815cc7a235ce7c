#![allow(dead_code)]

use crest::{Decimal, NaiveDate, PriceRecord, PriceSeries};

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

/// `(day of March 2024, close, volume)` rows.
pub fn series(symbol: &str, rows: &[(u32, i64, u64)]) -> PriceSeries {
    PriceSeries::new(
        symbol,
        rows.iter()
            .map(|&(d, close, volume)| PriceRecord::new(day(d), Decimal::from(close), volume))
            .collect(),
    )
}

pub fn write_file(dir: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}
