//! Wrapping existing errors: std errors and raw message/name/stack parts.
//!
//! Run with: `cargo run --example wrap_source_error`

use stable_error::prelude::*;

fn read_config() -> Result<String, StableError> {
    std::fs::read_to_string("/definitely/not/here.toml")
        .stable_with(|b| b.category("config").status_code(503))
}

fn main() {
    match read_config() {
        Ok(_) => unreachable!("the file does not exist"),
        Err(err) => {
            println!("{err}");
            println!("original name: {}", err.metadata()["originalName"]);
        }
    }

    // Errors ingested from another runtime arrive as raw parts.
    let parts = SourceParts::new("undefined is not a function", "TypeError")
        .with_stack("at render (app.js:42)\nat main (app.js:7)");

    let err = StableError::wrap(&parts).category("frontend").build();
    println!("inherited stack:\n{}", err.stack().unwrap_or("<none>"));
}
