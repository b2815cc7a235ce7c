use crest::{Crest, Decimal, DuplicateDates, NaiveDate, PriceRecord, PriceSeries, SortPolicy};

fn series(symbol: &str, rows: &[(u32, i64)]) -> Result<PriceSeries, Box<dyn std::error::Error>> {
    let mut records = Vec::with_capacity(rows.len());
    for &(day, close) in rows {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).ok_or("bad day")?;
        records.push(PriceRecord::new(date, Decimal::from(close), 1_000 + u64::from(day)));
    }
    Ok(PriceSeries::new(symbol, records))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // May 2nd is listed twice in the first export
    let a = series("A", &[(1, 10), (2, 11), (2, 30), (3, 12)])?;
    let b = series("B", &[(1, 20), (2, 21), (3, 22)])?;

    for (dups, policy) in [
        (DuplicateDates::FirstWins, SortPolicy::Stable),
        (DuplicateDates::KeepAll, SortPolicy::Stable),
        (DuplicateDates::KeepAll, SortPolicy::PreferRight),
    ] {
        let crest = Crest::builder()
            .duplicate_dates(dups)
            .sort_policy(policy)
            .build()?;
        let report = crest.analyze(&a, &b)?;
        let g = &report.first.gain;
        println!(
            "{dups:?}/{policy:?}: {} aligned rows, A best window [{}, {}] gain {:.2}",
            report.aligned_days, g.start, g.end, g.gain
        );
    }
    Ok(())
}
