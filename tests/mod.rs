use stable_error::{derive_id, Metadata, StableError};

pub mod id;

#[test]
fn full_pipeline_is_deterministic_across_records() {
    let first = StableError::builder("Payment 42 declined")
        .category("billing")
        .build();
    let second = StableError::builder("Payment 42 declined")
        .category("billing")
        .build();

    assert_eq!(first.id(), second.id());
}

#[test]
fn record_id_matches_standalone_derivation() {
    let err = StableError::builder("Disk quota exceeded for user 7")
        .category("storage")
        .build();

    assert_eq!(err.id(), derive_id(err.message(), err.category(), err.metadata()));
}

#[test]
fn id_ignores_descriptive_fields() {
    let base = StableError::builder("timeout").category("net").build();
    let louder = StableError::builder("timeout")
        .category("net")
        .severity(stable_error::Severity::Critical)
        .status_code(504)
        .build();

    assert_eq!(base.id(), louder.id());
}

#[test]
fn id_shape_is_eight_lowercase_hex() {
    for message in ["", "a", "User 123 not found", "日本語のエラー"] {
        let id = derive_id(message, "test", &Metadata::new());
        assert_eq!(id.len(), 8, "message: {message:?}");
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
