//! Metadata mapping and the allow-list filter used for id derivation.
//!
//! An error record stores the *full* metadata supplied by the caller for
//! display and debugging. Only a fixed allow-listed subset of keys ever
//! influences the derived id, so that volatile entries (user IDs, raw
//! timestamps, request IDs) do not split one failure into many groups.

use serde_json::Value;
use smallvec::SmallVec;

/// Arbitrary key/value metadata attached to an error record.
pub type Metadata = serde_json::Map<String, Value>;

/// Keys whose values participate in id derivation.
///
/// Everything else is silently dropped by [`filter_for_id`], an intentional
/// narrowing rather than a validation failure.
pub const ID_METADATA_KEYS: [&str; 6] =
    ["type", "code", "field", "operation", "service", "component"];

/// Filtered metadata entries collected inline.
///
/// The allow-list has six keys, so the surviving entries always fit in
/// inline storage without a heap allocation.
pub(crate) type EntryVec<'a> = SmallVec<[(&'a str, &'a Value); 6]>;

/// Returns the allow-listed, non-null entries sorted by key ascending.
///
/// This is the exact sequence the stable hasher consumes.
pub(crate) fn filtered_entries(metadata: &Metadata) -> EntryVec<'_> {
    let mut entries: EntryVec<'_> = metadata
        .iter()
        .filter(|(key, value)| ID_METADATA_KEYS.contains(&key.as_str()) && !value.is_null())
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Reduces a metadata mapping to the subset that influences id derivation.
///
/// Retains only entries whose key is in [`ID_METADATA_KEYS`] and whose value
/// is not null. Unknown keys are dropped without error or warning.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stable_error::{filter_for_id, Metadata};
///
/// let mut metadata = Metadata::new();
/// metadata.insert("type".into(), json!("validation"));
/// metadata.insert("userId".into(), json!(123));
/// metadata.insert("code".into(), json!(null));
///
/// let filtered = filter_for_id(&metadata);
/// assert_eq!(filtered.len(), 1);
/// assert!(filtered.contains_key("type"));
/// ```
#[must_use]
pub fn filter_for_id(metadata: &Metadata) -> Metadata {
    filtered_entries(metadata)
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.clone()))
        .collect()
}
