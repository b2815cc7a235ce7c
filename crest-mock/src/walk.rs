use chrono::{Datelike, Days, NaiveDate, Weekday};
use crest_core::{CrestError, PriceRecord, PriceSeries, SeriesSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const MIN_CLOSE_CENTS: i64 = 100;

/// A reproducible random-walk history of `days` trading days.
///
/// Starts at 100.00 on 2024-01-02 and skips weekends. Each close moves by up to
/// two dollars either way and never drops below one dollar. The same `seed`
/// always yields the same series.
#[must_use]
pub fn random_walk(symbol: &str, seed: u64, days: usize) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(days);
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 2);
    let mut cents: i64 = 10_000;

    while records.len() < days {
        let Some(d) = date else { break };
        if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            let volume = rng.random_range(1_000_000u64..5_000_000);
            records.push(PriceRecord::new(d, Decimal::new(cents, 2), volume));
            cents = (cents + rng.random_range(-200i64..=200)).max(MIN_CLOSE_CENTS);
        }
        date = d.checked_add_days(Days::new(1));
    }
    PriceSeries::new(symbol, records)
}

/// Serves a [`random_walk`] for any symbol, seeded from the symbol's bytes.
pub struct RandomWalkSource {
    days: usize,
}

impl RandomWalkSource {
    /// Source producing `days` trading days per symbol.
    #[must_use]
    pub const fn new(days: usize) -> Self {
        Self { days }
    }

    /// Seed used for `symbol` (FNV-1a over its bytes).
    #[must_use]
    pub fn seed_for(symbol: &str) -> u64 {
        symbol.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        })
    }
}

impl SeriesSource for RandomWalkSource {
    fn name(&self) -> &'static str {
        "crest-mock-walk"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn series(&self, symbol: &str) -> Result<PriceSeries, CrestError> {
        if symbol.is_empty() {
            return Err(CrestError::not_found("series for empty symbol"));
        }
        Ok(random_walk(symbol, Self::seed_for(symbol), self.days))
    }
}
