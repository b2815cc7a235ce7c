use std::sync::Arc;

use crest::Crest;
use crest_mock::RandomWalkSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three years of synthetic trading days per symbol
    let crest = Crest::builder()
        .with_source(Arc::new(RandomWalkSource::new(750)))
        .build()?;

    let report = crest.analyze_symbols("WALK-A", "WALK-B")?;
    let c = &report.combined;
    println!(
        "{} aligned days; combined window {} .. {} gains {:.2}",
        report.aligned_days, c.start_date, c.end_date, c.gain
    );
    for contrib in &c.contributions {
        println!("  {}: {:.2}", contrib.symbol, contrib.sum);
    }
    println!("leader: {}", report.leader().symbol);
    Ok(())
}
