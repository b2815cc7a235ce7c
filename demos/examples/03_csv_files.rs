use std::path::{Path, PathBuf};

use crest::{Crest, PriceSeries, SeriesSource};
use crest_mock::MockSource;

/// Write `series` the way exchange downloads look: newest first, `$` prices.
fn write_export(dir: &Path, series: &PriceSeries) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = dir.join(format!("{}.csv", series.symbol.to_lowercase()));
    let mut w = csv::Writer::from_path(&path)?;
    w.write_record(["Date", "Close/Last", "Volume"])?;
    for r in &series.records {
        w.write_record([
            r.date.format("%m/%d/%Y").to_string(),
            format!("${:.2}", r.close),
            r.volume.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join(format!("crest-demo-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;

    let fixtures = MockSource::new();
    let a = write_export(&dir, &fixtures.series("MSFT")?)?;
    let b = write_export(&dir, &fixtures.series("AAPL")?)?;
    println!("Wrote {} and {}", a.display(), b.display());

    let crest = Crest::builder().build()?;
    let report = crest.analyze_files(&a, &b)?;
    println!("{}", report.to_json()?);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
