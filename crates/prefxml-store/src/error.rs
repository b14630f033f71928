//! Error types for preference values and stores.

use thiserror::Error;

use crate::Kind;

/// Errors that can occur when converting values or loading a store.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tag name outside the supported vocabulary.
    #[error("unknown type tag: {0}")]
    UnknownKind(String),

    /// Text that cannot be coerced to the tagged kind.
    #[error("invalid {kind} value: {text:?}")]
    InvalidValue { kind: Kind, text: String },

    /// Stored value whose kind is not one of the five supported scalars.
    #[error("unsupported value for key {key:?}: {reason}")]
    UnsupportedValue { key: String, reason: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
