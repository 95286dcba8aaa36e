//! Core types shared across the component builder.
//!
//! - [`BuildError`] - the error taxonomy of resolution and aggregation
//! - [`ErrorContext`] / [`user_friendly_error`] - CLI-facing error rendering

pub mod error;

pub use error::{BuildError, ErrorContext, user_friendly_error};

/// Result alias for operations that fail with a [`BuildError`].
pub type Result<T, E = BuildError> = std::result::Result<T, E>;
