//! Construction of [`StableError`] records.
//!
//! The builder has two entry paths: a plain message
//! ([`StableError::builder`]) and an existing error-like source
//! ([`StableError::wrap`]). Both apply the same defaults and run the same
//! normalize/filter/hash pipeline; the wrapping path additionally folds the
//! source's name and stack into the stored metadata.

use std::backtrace::{Backtrace, BacktraceStatus};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::id::derive_id;
use crate::metadata::Metadata;
use crate::traits::ErrorSource;
use crate::types::{Severity, StableError};

/// Category applied when none is supplied (or the supplied one is blank).
pub const DEFAULT_CATEGORY: &str = "general";

/// Status code applied when none is supplied.
pub const DEFAULT_STATUS_CODE: u16 = 500;

impl StableError {
    /// Creates a record from a message with every option defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use stable_error::{Severity, StableError};
    ///
    /// let err = StableError::new("connection refused");
    ///
    /// assert_eq!(err.category(), "general");
    /// assert_eq!(err.severity(), Severity::Medium);
    /// assert_eq!(err.status_code(), 500);
    /// assert!(err.metadata().is_empty());
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self::builder(message).build()
    }

    /// Starts a builder from a raw message.
    ///
    /// No stack or name is inherited on this path; metadata starts from
    /// whatever the caller supplies.
    pub fn builder(message: impl Into<String>) -> StableErrorBuilder {
        StableErrorBuilder::from_message(message)
    }

    /// Starts a builder that wraps an existing error-like source.
    ///
    /// The source's message becomes the record's message, and its name and
    /// stack (when present) are folded into the metadata as `originalName`
    /// and `originalStack`. An inherited stack is adopted verbatim on the
    /// record. The source is read-only input and never mutated.
    ///
    /// Any `E: std::error::Error` is accepted through the blanket
    /// [`ErrorSource`] impl; inputs that are neither text nor error-like
    /// are unrepresentable by construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use stable_error::{SourceParts, StableError};
    ///
    /// let source = SourceParts::new("boom", "LegacyError").with_stack("at main.js:1");
    /// let err = StableError::wrap(&source).category("legacy").build();
    ///
    /// assert_eq!(err.stack(), Some("at main.js:1"));
    /// assert_eq!(err.metadata()["originalName"], "LegacyError");
    /// assert_eq!(err.metadata()["originalStack"], "at main.js:1");
    /// ```
    pub fn wrap<S: ErrorSource + ?Sized>(source: &S) -> StableErrorBuilder {
        StableErrorBuilder::from_source(source)
    }
}

/// Builder assembling one [`StableError`] record atomically.
#[must_use]
#[derive(Debug, Clone)]
pub struct StableErrorBuilder {
    message: String,
    category: Option<String>,
    metadata: Metadata,
    severity: Severity,
    status_code: u16,
    source_name: Option<String>,
    source_stack: Option<String>,
}

impl StableErrorBuilder {
    pub(crate) fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: None,
            metadata: Metadata::new(),
            severity: Severity::default(),
            status_code: DEFAULT_STATUS_CODE,
            source_name: None,
            source_stack: None,
        }
    }

    pub(crate) fn from_source<S: ErrorSource + ?Sized>(source: &S) -> Self {
        Self {
            message: source.message(),
            category: None,
            metadata: Metadata::new(),
            severity: Severity::default(),
            status_code: DEFAULT_STATUS_CODE,
            source_name: Some(source.name()),
            source_stack: source.stack(),
        }
    }

    /// Sets the category label (blank values fall back to `"general"`).
    #[inline]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the severity (default: medium).
    #[inline]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the status code (default: 500).
    #[inline]
    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Replaces the caller-supplied metadata mapping.
    ///
    /// On the wrapping path, `originalName`/`originalStack` are re-applied
    /// at build time and override same-named keys supplied here.
    #[inline]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Inserts a single metadata entry.
    #[inline]
    pub fn metadata_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Builds the record: captures the timestamp, folds wrap-path metadata,
    /// derives the id, and resolves the stack.
    ///
    /// The id is computed from the unfiltered merged metadata; the
    /// allow-list filter runs inside the hasher, so the stored mapping
    /// keeps the full merged set while only the allow-listed subset
    /// influenced the id.
    pub fn build(self) -> StableError {
        let category = match self.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY.to_owned(),
        };

        let mut metadata = self.metadata;
        if let Some(name) = self.source_name {
            metadata.insert("originalName".to_owned(), Value::String(name));
        }
        if let Some(stack) = &self.source_stack {
            metadata.insert("originalStack".to_owned(), Value::String(stack.clone()));
        }

        let id = derive_id(&self.message, &category, &metadata);
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let stack = self.source_stack.or_else(captured_backtrace);

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %id, category = %category, "stable error constructed");

        StableError {
            id,
            message: self.message,
            category,
            metadata,
            severity: self.severity,
            timestamp,
            status_code: self.status_code,
            stack,
        }
    }
}

/// Renders a freshly captured backtrace, or `None` when the runtime did not
/// capture one (e.g. `RUST_BACKTRACE` unset).
fn captured_backtrace() -> Option<String> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}
