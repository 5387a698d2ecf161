use stable_error::normalize;

#[test]
fn numbers_become_placeholder() {
    assert_eq!(normalize("User 123 not found"), "user NUMBER not found");
}

#[test]
fn messages_differing_only_in_numbers_normalize_identically() {
    assert_eq!(
        normalize("User 123 not found"),
        normalize("User 456 not found")
    );
}

#[test]
fn lowercases_and_trims() {
    assert_eq!(normalize("  USER NOT FOUND  "), "user not found");
}

#[test]
fn uuids_become_placeholder() {
    assert_eq!(
        normalize("User 550e8400-e29b-41d4-a716-446655440000 not found"),
        "user UUID not found"
    );
    assert_eq!(
        normalize("User 6BA7B810-9DAD-11D1-80B4-00C04FD430C8 not found"),
        "user UUID not found"
    );
}

#[test]
fn iso_timestamps_become_placeholder() {
    assert_eq!(
        normalize("Error at 2023-01-01T10:30:00Z: timeout"),
        "error at TIMESTAMP: timeout"
    );
    assert_eq!(
        normalize("Error at 2023-01-01T10:30:00.123Z: timeout"),
        "error at TIMESTAMP: timeout"
    );
    assert_eq!(
        normalize("started 2024-06-30T23:59:59 ended"),
        "started TIMESTAMP ended"
    );
}

#[test]
fn thirteen_digit_numbers_take_precedence_over_generic_numbers() {
    assert_eq!(normalize("Error at 1672531200000"), "error at TIMESTAMP_MS");
}

#[test]
fn twelve_and_fourteen_digit_numbers_are_plain_numbers() {
    assert_eq!(normalize("seq 167253120000"), "seq NUMBER");
    assert_eq!(normalize("seq 16725312000000"), "seq NUMBER");
}

#[test]
fn whitespace_runs_collapse() {
    assert_eq!(
        normalize("Error   with\t multiple\n\nspaces"),
        "error with multiple spaces"
    );
}

#[test]
fn empty_and_blank_input_yield_empty_string() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}

#[test]
fn digits_embedded_in_words_are_untouched() {
    // Only standalone, word-bounded digit runs are replaced.
    assert_eq!(normalize("sha256 mismatch"), "sha256 mismatch");
    assert_eq!(normalize("v2 handler failed"), "v2 handler failed");
}
