//! Seams for feeding foreign errors into the record pipeline.

pub mod error_source;
pub mod result_ext;

pub use error_source::*;
pub use result_ext::*;
