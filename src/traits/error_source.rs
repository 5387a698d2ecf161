//! The "error-like" seam consumed by the wrapping constructor.
//!
//! Anything exposing a message, a name, and optionally a stack can be
//! wrapped into a [`StableError`](crate::StableError). Every
//! `E: std::error::Error` qualifies automatically through the blanket impl;
//! [`SourceParts`] covers raw message/name/stack triples ingested from logs
//! or foreign runtimes.

/// An error-like value that can be wrapped into a record.
pub trait ErrorSource {
    /// Human-readable failure text.
    fn message(&self) -> String;

    /// Discriminating name of the source error kind.
    fn name(&self) -> String;

    /// Diagnostic stack trace, when the source carries one.
    fn stack(&self) -> Option<String> {
        None
    }
}

/// Every standard error is an [`ErrorSource`]: the message comes from
/// `Display`, the name from the short type name, and no stack is inherited
/// (a fresh backtrace is captured at construction instead, when available).
impl<E: std::error::Error> ErrorSource for E {
    fn message(&self) -> String {
        self.to_string()
    }

    fn name(&self) -> String {
        short_type_name::<E>().to_owned()
    }
}

/// Last path segment of a type name, with generic arguments stripped.
///
/// `std::io::Error` -> `Error`, `my_crate::ParseError<u8>` -> `ParseError`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Raw message/name/stack parts treated as an error-like source.
///
/// # Examples
///
/// ```
/// use stable_error::{SourceParts, StableError};
///
/// let parts = SourceParts::new("undefined is not a function", "TypeError")
///     .with_stack("at render (app.js:42)");
/// let err = StableError::wrap(&parts).build();
///
/// assert_eq!(err.message(), "undefined is not a function");
/// assert_eq!(err.metadata()["originalName"], "TypeError");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceParts {
    message: String,
    name: String,
    stack: Option<String>,
}

impl SourceParts {
    /// Creates source parts from a message and a name.
    pub fn new(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: name.into(),
            stack: None,
        }
    }

    /// Attaches a stack trace to be inherited verbatim.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

impl ErrorSource for SourceParts {
    fn message(&self) -> String {
        self.message.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn stack(&self) -> Option<String> {
        self.stack.clone()
    }
}
