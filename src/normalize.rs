//! Message normalization for stable id derivation.
//!
//! Variable substrings (UUIDs, timestamps, numeric IDs) are replaced with
//! fixed placeholders so that two occurrences of the same failure normalize
//! to the same canonical text.
//!
//! # Examples
//!
//! ```
//! use stable_error::normalize;
//!
//! assert_eq!(normalize("User 123 not found"), "user NUMBER not found");
//! assert_eq!(normalize("  USER NOT FOUND  "), "user not found");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex patterns for normalization, in application order.
struct NormalizePatterns {
    /// Matches UUIDs: `550e8400-e29b-41d4-a716-446655440000`
    uuid: Regex,
    /// Matches ISO 8601 timestamps: `2024-01-15T10:30:00.123Z`
    iso_timestamp: Regex,
    /// Matches standalone 13-digit integers (millisecond epoch shape)
    epoch_millis: Regex,
    /// Matches any remaining standalone run of digits
    number: Regex,
}

fn build_patterns() -> Option<NormalizePatterns> {
    Some(NormalizePatterns {
        uuid: Regex::new(
            r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        )
        .ok()?,
        iso_timestamp: Regex::new(r"(?i)\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z?").ok()?,
        epoch_millis: Regex::new(r"\b\d{13}\b").ok()?,
        number: Regex::new(r"\b\d+\b").ok()?,
    })
}

static PATTERNS: LazyLock<Option<NormalizePatterns>> = LazyLock::new(build_patterns);

/// Normalizes a raw error message into its canonical form.
///
/// Applied rules, in order (earlier rules must fire before later, more
/// general ones):
///
/// 1. Lowercase and trim.
/// 2. UUID-shaped substrings -> `UUID`.
/// 3. ISO 8601 timestamps -> `TIMESTAMP`.
/// 4. Standalone 13-digit integers -> `TIMESTAMP_MS`. Runs before rule 5,
///    otherwise 13-digit numbers would be absorbed as plain numbers.
/// 5. Standalone digit runs -> `NUMBER`.
/// 6. Collapse whitespace runs to single spaces.
///
/// Never fails: empty input yields an empty string, and if the pattern set
/// could not be compiled the substitutions are skipped while lowercasing
/// and whitespace collapsing still apply.
#[must_use]
pub fn normalize(message: &str) -> String {
    let mut result = message.trim().to_lowercase();

    if let Some(patterns) = PATTERNS.as_ref() {
        result = patterns.uuid.replace_all(&result, "UUID").to_string();
        result = patterns
            .iso_timestamp
            .replace_all(&result, "TIMESTAMP")
            .to_string();
        result = patterns
            .epoch_millis
            .replace_all(&result, "TIMESTAMP_MS")
            .to_string();
        result = patterns.number.replace_all(&result, "NUMBER").to_string();
    }

    collapse_whitespace(&result)
}

/// Collapses whitespace runs to a single space and trims the ends.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_whitespace {
                result.push(' ');
            }
            prev_whitespace = true;
        } else {
            result.push(c);
            prev_whitespace = false;
        }
    }

    result.trim().to_owned()
}
