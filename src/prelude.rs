//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use stable_error::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`stable_error!`], [`metadata!`]
//! - **Types**: [`StableError`], [`StableErrorBuilder`], [`Severity`],
//!   [`Metadata`]
//! - **Traits**: [`ErrorSource`], [`ResultExt`]
//! - **Functions**: [`derive_id`], [`normalize`], [`filter_for_id`]
//!
//! # Examples
//!
//! ```
//! use stable_error::prelude::*;
//!
//! let err = StableError::builder("rate limit exceeded for user 42")
//!     .category("throttle")
//!     .severity(Severity::Low)
//!     .status_code(429)
//!     .build();
//!
//! assert_eq!(err.id(), derive_id(err.message(), err.category(), err.metadata()));
//! ```

// Macros
pub use crate::{metadata, stable_error};

// Core functions
pub use crate::id::{canonical_input, derive_id};
pub use crate::metadata::{filter_for_id, Metadata, ID_METADATA_KEYS};
pub use crate::normalize::normalize;

// Types
pub use crate::types::{Severity, StableError, StableErrorBuilder};

// Traits
pub use crate::traits::{ErrorSource, ResultExt, SourceParts};
