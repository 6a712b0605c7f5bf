//! Error types for alphatimer-core.
//!
//! The domain has almost no failure modes: a stale timer callback is a
//! suppressed no-op, not an error. What remains is surface-level.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Unknown locale tag passed to the strings lookup.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Event or frame serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
