//! Deterministic, stable identifiers for error occurrences.
//!
//! Semantically equivalent errors (same failure, different variable details
//! such as IDs, timestamps, or UUIDs) collapse to the same 8-character id
//! across process runs and machines, so error-tracking pipelines can group
//! and count occurrences without fragile full-message matching.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `stable_error::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building an Error Record
//!
//! ```
//! use stable_error::{Severity, StableError};
//!
//! let err = StableError::builder("User 123 not found")
//!     .category("auth")
//!     .severity(Severity::High)
//!     .status_code(404)
//!     .build();
//!
//! assert_eq!(err.category(), "auth");
//! assert_eq!(err.id().len(), 8);
//! assert_eq!(err.status_code(), 404);
//! ```
//!
//! ## Variable Details Collapse to One Id
//!
//! ```
//! use stable_error::{derive_id, Metadata};
//!
//! let a = derive_id("User 123 not found", "auth", &Metadata::new());
//! let b = derive_id("User 456 not found", "auth", &Metadata::new());
//!
//! assert_eq!(a, b);
//! ```
//!
//! ## Wrapping an Existing Error
//!
//! ```
//! use stable_error::StableError;
//!
//! let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
//! let err = StableError::wrap(&io_err).category("fs").build();
//!
//! assert_eq!(err.metadata()["originalName"], "Error");
//! assert_eq!(err.message(), "missing file");
//! ```

/// Stable id derivation from normalized message, category, and metadata
pub mod id;
/// Macros for record and metadata construction
pub mod macros;
/// Metadata mapping type and the allow-list filter
pub mod metadata;
/// Message normalization with placeholder substitution
pub mod normalize;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Seams for wrapping foreign errors and `Result` values
pub mod traits;
/// StableError record, severity enumeration, and builder
pub mod types;

pub use id::{canonical_input, derive_id};
pub use metadata::{filter_for_id, Metadata, ID_METADATA_KEYS};
pub use normalize::normalize;
pub use traits::{ErrorSource, ResultExt, SourceParts};
pub use types::{Severity, StableError, StableErrorBuilder};

#[doc(hidden)]
pub use serde_json as __serde_json;
