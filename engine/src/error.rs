//! Error types for the catalog engine.

use thiserror::Error;

/// All possible errors from the catalog engine.
///
/// Mutations never fail; errors only come from decoding API payloads and
/// from serializing snapshots.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid payload from {source_name}: {message}")]
    InvalidPayload {
        source_name: String,
        message: String,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
