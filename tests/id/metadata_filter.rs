use serde_json::json;
use stable_error::{filter_for_id, metadata, Metadata, ID_METADATA_KEYS};

#[test]
fn keeps_only_allow_listed_keys() {
    let metadata = metadata! {
        "type" => "validation",
        "field" => "email",
        "userId" => 123,
        "timestamp" => "2023-01-01",
    };

    let filtered = filter_for_id(&metadata);

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered["type"], "validation");
    assert_eq!(filtered["field"], "email");
    assert!(!filtered.contains_key("userId"));
    assert!(!filtered.contains_key("timestamp"));
}

#[test]
fn drops_null_values_even_for_allow_listed_keys() {
    let metadata = metadata! {
        "code" => null,
        "service" => "payments",
    };

    let filtered = filter_for_id(&metadata);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered["service"], "payments");
}

#[test]
fn empty_mapping_stays_empty() {
    assert!(filter_for_id(&Metadata::new()).is_empty());
}

#[test]
fn every_allow_listed_key_survives() {
    let mut metadata = Metadata::new();
    for key in ID_METADATA_KEYS {
        metadata.insert(key.to_owned(), json!("x"));
    }

    let filtered = filter_for_id(&metadata);
    assert_eq!(filtered.len(), ID_METADATA_KEYS.len());
}

#[test]
fn non_string_values_survive_filtering() {
    let metadata = metadata! {
        "code" => 404,
        "component" => ["auth", "session"],
    };

    let filtered = filter_for_id(&metadata);
    assert_eq!(filtered["code"], 404);
    assert_eq!(filtered["component"], json!(["auth", "session"]));
}
