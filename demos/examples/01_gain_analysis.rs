use crest_demos::common::{builder, symbols};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let crest = builder().build()?;
    let (a, b) = symbols();
    println!("Analysing {a} vs {b}...\n");

    let report = crest.analyze_symbols(&a, &b)?;
    println!("{report}");

    let (from, to) = report.highlight();
    println!("Chart highlight: {from} .. {to} ({} aligned days)", report.aligned_days);
    Ok(())
}
