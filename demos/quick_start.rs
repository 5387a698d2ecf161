//! Minimal tour: build records and watch variable details collapse.
//!
//! Run with: `cargo run --example quick_start`

use stable_error::prelude::*;

fn main() {
    // Two occurrences of the same failure with different user ids.
    let first = StableError::builder("User 123 not found")
        .category("auth")
        .status_code(404)
        .build();
    let second = StableError::builder("User 456 not found")
        .category("auth")
        .status_code(404)
        .build();

    println!("first:  {first}");
    println!("second: {second}");
    assert_eq!(first.id(), second.id());
    println!("-> grouped under id {}", first.id());

    // Allow-listed metadata participates in the id, everything else is
    // stored for display only.
    let err = StableError::builder("invalid email")
        .category("validation")
        .severity(Severity::High)
        .status_code(422)
        .metadata(metadata! {
            "type" => "validation",
            "field" => "email",
            "userId" => 99,
        })
        .build();

    println!("wire form: {}", err.to_json());
}
