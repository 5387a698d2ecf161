//! Stable id derivation.
//!
//! Combines the normalized message, normalized category, and filtered
//! metadata into a canonical string, then hashes it into a fixed-width
//! 8-character lowercase hex identifier. The hash is a 32-bit signed
//! polynomial rolling hash over UTF-16 code units with wrapping arithmetic,
//! bit-exact with ids produced by `(h << 5) - h + c` implementations in
//! other runtimes, so identifiers interoperate across stacks.
//!
//! The id is an equivalence-grouping key, not a security token: collisions
//! are possible and acceptable.

use core::fmt::Write;

use serde_json::Value;

use crate::metadata::{filtered_entries, Metadata};
use crate::normalize::normalize;

/// Builds the canonical string the stable hash is computed over.
///
/// Layout: `message:<normalized>|category:<lowercase-trimmed>` followed by
/// `|metadata:k1:v1,k2:v2,...` only when the filtered metadata is non-empty,
/// with keys sorted ascending and values in lowercase-trimmed string form.
///
/// Exposed for debugging and for parity checks against other
/// implementations of the same scheme.
#[must_use]
pub fn canonical_input(message: &str, category: &str, metadata: &Metadata) -> String {
    let mut canonical = String::with_capacity(message.len() + category.len() + 24);
    canonical.push_str("message:");
    canonical.push_str(&normalize(message));
    canonical.push_str("|category:");
    canonical.push_str(&category.trim().to_lowercase());

    let entries = filtered_entries(metadata);
    if !entries.is_empty() {
        canonical.push_str("|metadata:");
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                canonical.push(',');
            }
            canonical.push_str(key);
            canonical.push(':');
            canonical.push_str(&value_fragment(value));
        }
    }

    canonical
}

/// Lowercase-trimmed string form of a metadata value.
///
/// Strings contribute their contents; any other JSON value contributes its
/// compact rendering (`123`, `true`, `[1,2]`).
fn value_fragment(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    raw.trim().to_lowercase()
}

/// 32-bit signed polynomial hash with multiplier 31, evaluated left to
/// right over UTF-16 code units, wrapping at 32 bits.
fn hash_code(input: &str) -> i32 {
    let mut acc: i32 = 0;
    for unit in input.encode_utf16() {
        acc = acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(i32::from(unit));
    }
    acc
}

/// Derives the stable identifier for an error occurrence.
///
/// The unfiltered metadata mapping is passed in; filtering happens here, so
/// callers keep the full mapping for display while only the allow-listed
/// subset influences the id.
///
/// Identical `(message, category, filtered metadata)` triples always yield
/// identical ids. The result is always exactly 8 lowercase hex characters
/// (`unsigned_abs` of a 32-bit value never exceeds 8 hex digits).
///
/// # Examples
///
/// ```
/// use stable_error::{derive_id, Metadata};
///
/// let id = derive_id("Connection refused", "network", &Metadata::new());
/// assert_eq!(id.len(), 8);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
/// ```
#[must_use]
pub fn derive_id(message: &str, category: &str, metadata: &Metadata) -> String {
    let canonical = canonical_input(message, category, metadata);
    let hash = hash_code(&canonical).unsigned_abs();

    let mut id = String::with_capacity(8);
    let _ = write!(id, "{hash:08x}");
    id
}
