use core::str::FromStr;
use stable_error::Severity;

#[test]
fn default_is_medium() {
    assert_eq!(Severity::default(), Severity::Medium);
}

#[test]
fn renders_lowercase_labels() {
    assert_eq!(Severity::Low.to_string(), "low");
    assert_eq!(Severity::Medium.to_string(), "medium");
    assert_eq!(Severity::High.to_string(), "high");
    assert_eq!(Severity::Critical.to_string(), "critical");
}

#[test]
fn parses_lowercase_labels() {
    assert_eq!(Severity::from_str("low"), Ok(Severity::Low));
    assert_eq!(Severity::from_str("critical"), Ok(Severity::Critical));
}

#[test]
fn rejects_unknown_labels() {
    assert!(Severity::from_str("fatal").is_err());
    assert!(Severity::from_str("Medium").is_err());
}

#[test]
fn orders_by_increasing_impact() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert!(Severity::High < Severity::Critical);
}

#[test]
fn serializes_as_lowercase_string() {
    let json = serde_json::to_value(Severity::High).expect("serializes");
    assert_eq!(json, "high");

    let parsed: Severity = serde_json::from_value(json).expect("deserializes");
    assert_eq!(parsed, Severity::High);
}
