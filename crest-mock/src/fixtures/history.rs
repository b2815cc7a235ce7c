use chrono::NaiveDate;
use crest_core::{PriceRecord, PriceSeries};
use rust_decimal::Decimal;

/// Rows are newest first, the way exchange downloads list them.
pub fn by_symbol(s: &str) -> Option<PriceSeries> {
    match s {
        "MSFT" => build(
            s,
            &[
                ((2024, 10, 15), 41874, 18_900_200),
                ((2024, 10, 14), 41914, 16_653_100),
                ((2024, 10, 11), 41632, 14_144_900),
                ((2024, 10, 10), 41584, 13_848_400),
                ((2024, 10, 9), 41746, 14_974_300),
                ((2024, 10, 8), 41471, 19_229_300),
                ((2024, 10, 7), 40954, 20_919_800),
                ((2024, 10, 4), 41606, 19_169_700),
                ((2024, 10, 3), 41654, 13_686_400),
                ((2024, 10, 2), 41713, 16_582_300),
                ((2024, 10, 1), 42069, 19_092_900),
            ],
        ),
        "AAPL" => build(
            s,
            &[
                ((2024, 10, 14), 23130, 39_882_100),
                ((2024, 10, 11), 22755, 31_759_200),
                ((2024, 10, 10), 22904, 28_183_500),
                ((2024, 10, 9), 22954, 33_591_100),
                ((2024, 10, 8), 22577, 31_855_700),
                ((2024, 10, 7), 22169, 39_505_400),
                ((2024, 10, 4), 22680, 37_345_100),
                ((2024, 10, 3), 22567, 34_044_200),
                ((2024, 10, 2), 22678, 32_880_600),
                ((2024, 10, 1), 22621, 63_285_000),
                ((2024, 9, 30), 23322, 54_541_900),
            ],
        ),
        "GOOG" => build(
            s,
            &[
                ((2024, 10, 4), 16818, 16_914_300),
                ((2024, 10, 3), 16795, 14_919_900),
                ((2024, 10, 2), 16665, 12_190_500),
                ((2024, 10, 1), 16875, 19_092_900),
            ],
        ),
        _ => None,
    }
}

fn build(symbol: &str, rows: &[((i32, u32, u32), i64, u64)]) -> Option<PriceSeries> {
    let records = rows
        .iter()
        .map(|&((y, m, d), cents, volume)| {
            Some(PriceRecord::new(
                NaiveDate::from_ymd_opt(y, m, d)?,
                Decimal::new(cents, 2),
                volume,
            ))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(PriceSeries::new(symbol, records))
}
