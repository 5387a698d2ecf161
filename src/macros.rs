//! Ergonomic macros for constructing records and metadata mappings.
//!
//! - [`macro@crate::stable_error`] - Formats a message (same arguments as
//!   `format!`) and builds a record with every option defaulted.
//! - [`macro@crate::metadata`] - Builds a [`Metadata`](crate::Metadata)
//!   mapping from `key => value` pairs; values accept anything `json!`
//!   accepts.

/// Formats a message and builds a [`StableError`](crate::StableError) with
/// default options.
///
/// # Examples
///
/// ```
/// use stable_error::stable_error;
///
/// let err = stable_error!("user {} not found", 123);
///
/// assert_eq!(err.message(), "user 123 not found");
/// assert_eq!(err.category(), "general");
/// ```
#[macro_export]
macro_rules! stable_error {
    ($($arg:tt)*) => {
        $crate::StableError::new(::std::format!($($arg)*))
    };
}

/// Builds a [`Metadata`](crate::Metadata) mapping from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use stable_error::{metadata, StableError};
///
/// let err = StableError::builder("invalid email")
///     .category("validation")
///     .metadata(metadata! {
///         "type" => "validation",
///         "field" => "email",
///         "attempt" => 3,
///     })
///     .build();
///
/// assert_eq!(err.metadata()["field"], "email");
/// assert_eq!(err.metadata()["attempt"], 3);
/// ```
#[macro_export]
macro_rules! metadata {
    () => {
        $crate::Metadata::new()
    };
    ($($key:expr => $value:tt),+ $(,)?) => {{
        let mut map = $crate::Metadata::new();
        $(
            map.insert(::std::convert::Into::into($key), $crate::__serde_json::json!($value));
        )+
        map
    }};
}
