use stable_error::{metadata, Severity, SourceParts, StableError};

#[test]
fn wrapping_preserves_the_source_stack_verbatim() {
    let stack = "TypeError: boom\n    at render (app.js:42)\n    at main (app.js:7)";
    let source = SourceParts::new("boom", "TypeError").with_stack(stack);

    let err = StableError::wrap(&source).build();

    assert_eq!(err.stack(), Some(stack));
    assert_eq!(err.name(), "StableError");
}

#[test]
fn wrapping_folds_original_name_and_stack_into_metadata() {
    let source = SourceParts::new("boom", "TypeError").with_stack("at app.js:1");

    let err = StableError::wrap(&source)
        .metadata(metadata! { "requestId" => "r-1" })
        .build();

    assert_eq!(err.metadata()["originalName"], "TypeError");
    assert_eq!(err.metadata()["originalStack"], "at app.js:1");
    assert_eq!(err.metadata()["requestId"], "r-1");
}

#[test]
fn wrap_path_keys_override_caller_supplied_ones() {
    let source = SourceParts::new("boom", "TypeError");

    let err = StableError::wrap(&source)
        .metadata(metadata! { "originalName" => "Spoofed" })
        .build();

    assert_eq!(err.metadata()["originalName"], "TypeError");
}

#[test]
fn stackless_source_omits_original_stack() {
    let source = SourceParts::new("boom", "TypeError");

    let err = StableError::wrap(&source).build();

    assert!(err.metadata().contains_key("originalName"));
    assert!(!err.metadata().contains_key("originalStack"));
}

#[test]
fn blank_category_falls_back_to_general() {
    let err = StableError::builder("boom").category("   ").build();

    assert_eq!(err.category(), "general");
}

#[test]
fn builder_options_are_applied() {
    let err = StableError::builder("rate limited")
        .category("throttle")
        .severity(Severity::Low)
        .status_code(429)
        .metadata_entry("service", "gateway")
        .build();

    assert_eq!(err.category(), "throttle");
    assert_eq!(err.severity(), Severity::Low);
    assert_eq!(err.status_code(), 429);
    assert_eq!(err.metadata()["service"], "gateway");
}

#[test]
fn metadata_entries_accumulate() {
    let err = StableError::builder("boom")
        .metadata_entry("type", "io")
        .metadata_entry("code", 7)
        .build();

    assert_eq!(err.metadata().len(), 2);
}

#[test]
fn wrapped_and_raw_construction_share_ids_for_equal_triples() {
    // originalName participates in the stored metadata but is not
    // allow-listed, so it cannot split the group.
    let source = SourceParts::new("connection refused", "IoError");

    let wrapped = StableError::wrap(&source).category("net").build();
    let raw = StableError::builder("connection refused").category("net").build();

    assert_eq!(wrapped.id(), raw.id());
}

#[test]
fn wrapping_a_stable_error_uses_its_type_name() {
    let inner = StableError::builder("boom").category("ops").build();

    let outer = StableError::wrap(&inner).category("outer").build();

    assert_eq!(outer.metadata()["originalName"], "StableError");
    assert_eq!(outer.message(), inner.to_string());
}
