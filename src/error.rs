//! Error types for Plugpath
//!
//! Uses `thiserror` for ergonomic error handling with automatic `Display`
//! and `Error` trait implementations.

use thiserror::Error;

/// The primary error type for Plugpath operations.
///
/// Resolution itself is infallible; only construction of a resolver can
/// fail, and only for the reasons below.
#[derive(Error, Debug)]
pub enum PlugError {
    /// A required argument was absent. Carries the parameter name so the
    /// caller can tell which argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// JSON deserialization errors from malformed configuration text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Plugpath operations.
pub type Result<T> = std::result::Result<T, PlugError>;
