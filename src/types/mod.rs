//! Error record types.
//!
//! [`StableError`] is the value this crate produces: an immutable snapshot
//! of one error occurrence carrying its derived id and descriptive fields.
//! Records are created atomically by [`StableErrorBuilder`] and never
//! mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use stable_error::{Severity, StableError};
//!
//! let err = StableError::builder("payment declined")
//!     .category("billing")
//!     .severity(Severity::Critical)
//!     .status_code(402)
//!     .build();
//!
//! println!("{}", err);
//! // Output: [billing] payment declined (id: 1a2b3c4d)
//! ```

pub mod builder;
pub mod severity;
pub mod stable_error;

pub use builder::*;
pub use severity::*;
pub use stable_error::*;
