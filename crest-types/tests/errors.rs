use crest_types::CrestError;

#[test]
fn helpers_build_expected_variants() {
    assert!(matches!(
        CrestError::invalid_input("empty series"),
        CrestError::InvalidInput(m) if m == "empty series"
    ));
    assert!(matches!(
        CrestError::invariant("nan"),
        CrestError::InvariantViolation(_)
    ));
    assert!(matches!(
        CrestError::not_found("series for MSFT"),
        CrestError::NotFound { what } if what == "series for MSFT"
    ));
}

#[test]
fn input_errors_are_classified() {
    assert!(CrestError::invalid_input("x").is_input_error());
    assert!(CrestError::data("bad price").is_input_error());
    assert!(!CrestError::Io("denied".into()).is_input_error());
    assert!(!CrestError::not_found("x").is_input_error());
}

#[test]
fn errors_roundtrip_through_json() {
    let err = CrestError::not_found("series for AAPL");
    let json = serde_json::to_string(&err).expect("serialize error");
    let de: CrestError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, err);
}
