//! The error record produced by this crate.

use core::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::metadata::Metadata;
use crate::types::Severity;

/// An immutable error occurrence with a deterministically derived id.
///
/// The `id` is a pure function of the message, category, and allow-listed
/// metadata subset: identical triples always yield identical ids, and no
/// other field influences it. Everything else is descriptive: the original
/// unnormalized message, the *full* unfiltered metadata, severity, status
/// code, creation timestamp, and an optional diagnostic stack.
///
/// Records are built once by [`StableErrorBuilder`](crate::StableErrorBuilder)
/// and should be treated as snapshots; no accessor exposes mutation.
///
/// `StableError` implements [`std::error::Error`], so it slots directly
/// into `Result` chains and `Box<dyn Error>` call sites when integration
/// with error-propagation control flow is required. The value itself stays
/// canonical either way.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StableError {
    pub(crate) id: String,
    pub(crate) message: String,
    pub(crate) category: String,
    pub(crate) metadata: Metadata,
    pub(crate) severity: Severity,
    pub(crate) timestamp: String,
    #[serde(rename = "statusCode")]
    pub(crate) status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) stack: Option<String>,
}

impl StableError {
    /// Fixed discriminator shared by every record of this kind.
    pub const NAME: &'static str = "StableError";

    /// Derived identifier: exactly 8 lowercase hex characters.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Original, unnormalized error text.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Free-form category label (`"general"` when none was supplied).
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Full unfiltered metadata mapping, as merged at construction.
    ///
    /// Distinct from the allow-listed subset that influenced the id.
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Severity of the occurrence.
    #[inline]
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Associated status code (defaults to 500).
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Creation time as an ISO 8601 string, captured once at construction.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Diagnostic stack trace, if one was inherited or captured.
    #[inline]
    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// The fixed discriminator, [`Self::NAME`].
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Serializes the record into its wire form.
    ///
    /// The returned object contains exactly the fields
    /// `id, message, category, metadata, severity, timestamp, statusCode,
    /// stack`, with `stack` omitted when absent. Field names and presence
    /// are a compatibility contract for downstream consumers (logging
    /// pipelines, HTTP error bodies).
    ///
    /// # Examples
    ///
    /// ```
    /// use stable_error::StableError;
    ///
    /// let err = StableError::new("disk full");
    /// let json = err.to_json();
    ///
    /// assert_eq!(json["category"], "general");
    /// assert_eq!(json["statusCode"], 500);
    /// assert_eq!(json["severity"], "medium");
    /// ```
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(8);
        map.insert("id".to_owned(), Value::String(self.id.clone()));
        map.insert("message".to_owned(), Value::String(self.message.clone()));
        map.insert("category".to_owned(), Value::String(self.category.clone()));
        map.insert("metadata".to_owned(), Value::Object(self.metadata.clone()));
        map.insert(
            "severity".to_owned(),
            Value::String(self.severity.as_str().to_owned()),
        );
        map.insert("timestamp".to_owned(), Value::String(self.timestamp.clone()));
        map.insert("statusCode".to_owned(), Value::from(self.status_code));
        if let Some(stack) = &self.stack {
            map.insert("stack".to_owned(), Value::String(stack.clone()));
        }
        Value::Object(map)
    }
}

impl Display for StableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {} (id: {})", self.category, self.message, self.id)
    }
}

impl std::error::Error for StableError {}
