//! Extension trait for converting `Result` error sides into records.
//!
//! # Examples
//!
//! ```
//! use stable_error::traits::ResultExt;
//! use stable_error::StableError;
//!
//! fn load_config() -> Result<String, StableError> {
//!     std::fs::read_to_string("config.toml")
//!         .stable_with(|b| b.category("config").status_code(503))
//! }
//!
//! assert!(load_config().is_err());
//! ```

use crate::types::{StableError, StableErrorBuilder};

/// Converts the error side of a `Result` into a [`StableError`] via the
/// wrapping path, so the derived id, `originalName`, and defaults all apply.
pub trait ResultExt<T, E> {
    /// Wraps the error with every option defaulted.
    fn stable(self) -> Result<T, StableError>;

    /// Wraps the error, letting a closure configure the builder first.
    ///
    /// The closure only runs on the error path, so the success path pays
    /// nothing for the configuration.
    fn stable_with<F>(self, configure: F) -> Result<T, StableError>
    where
        F: FnOnce(StableErrorBuilder) -> StableErrorBuilder;
}

impl<T, E: std::error::Error> ResultExt<T, E> for Result<T, E> {
    fn stable(self) -> Result<T, StableError> {
        self.map_err(|err| StableError::wrap(&err).build())
    }

    fn stable_with<F>(self, configure: F) -> Result<T, StableError>
    where
        F: FnOnce(StableErrorBuilder) -> StableErrorBuilder,
    {
        self.map_err(|err| configure(StableError::wrap(&err)).build())
    }
}
