use std::sync::Arc;

use crest::{Crest, CrestError, SeriesSource};
use crest_mock::{DynamicMockSource, MockBehavior, MockSource, random_walk};

#[test]
fn analyzes_fixture_symbols() {
    let crest = Crest::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap();
    let report = crest.analyze_symbols("MSFT", "AAPL").unwrap();

    // MSFT has 10/15 and AAPL has 9/30 that the other lacks
    assert_eq!(report.aligned_days, 10);
    assert_eq!(report.first.symbol, "MSFT");
    assert_eq!(report.second.symbol, "AAPL");
    assert!(report.combined.start_date < report.combined.end_date);
    assert!(report.first.gain.start_date < report.first.gain.end_date);
}

#[test]
fn not_found_falls_through_to_next_source() {
    let mut four_days = MockSource::new().series("GOOG").unwrap();
    four_days.symbol = "AAPL".to_string();
    let (p0, c0) = DynamicMockSource::new_with_controller("P0");
    c0.set_series_behavior("AAPL", MockBehavior::Return(four_days));

    let crest = Crest::builder()
        .with_source(p0)
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap();
    let report = crest.analyze_symbols("MSFT", "AAPL").unwrap();

    // MSFT fell through to the fixtures; AAPL was served by P0
    assert_eq!(c0.requests(), vec!["MSFT", "AAPL"]);
    assert_eq!(report.aligned_days, 4);
}

#[test]
fn other_errors_stop_the_lookup() {
    let (p0, c0) = DynamicMockSource::new_with_controller("P0");
    let (p1, c1) = DynamicMockSource::new_with_controller("P1");
    c0.set_series_behavior("MSFT", MockBehavior::Fail(CrestError::Io("disk".into())));
    c1.set_series_behavior("MSFT", MockBehavior::Return(random_walk("MSFT", 1, 10)));

    let crest = Crest::builder().with_source(p0).with_source(p1).build().unwrap();
    let err = crest.analyze_symbols("MSFT", "AAPL").unwrap_err();
    assert_eq!(err, CrestError::Io("disk".into()));
    assert!(c1.requests().is_empty());
}

#[test]
fn unknown_symbol_everywhere_is_not_found() {
    let (p0, _c0) = DynamicMockSource::new_with_controller("P0");
    let crest = Crest::builder()
        .with_source(p0)
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap();
    assert!(matches!(
        crest.analyze_symbols("MSFT", "ZZZZ"),
        Err(CrestError::NotFound { .. })
    ));
}

#[test]
fn requires_a_source() {
    let crest = Crest::builder().build().unwrap();
    assert!(matches!(
        crest.analyze_symbols("MSFT", "AAPL"),
        Err(CrestError::InvalidInput(_))
    ));
}

#[test]
fn source_data_errors_propagate() {
    let crest = Crest::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap();
    assert!(matches!(
        crest.analyze_symbols("FAIL", "MSFT"),
        Err(CrestError::Data(_))
    ));
}
