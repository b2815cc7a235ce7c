use crest_demos::common::{builder, symbols};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,crest=debug,crest_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Fixture source in CI when CREST_DEMOS_USE_MOCK is set
    let crest = builder().build()?;
    let (a, b) = symbols();

    let report = crest.analyze_symbols(&a, &b)?;
    tracing::info!(aligned = report.aligned_days, gain = report.combined.gain, "analysis done");

    Ok(())
}
