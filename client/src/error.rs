//! Unified error handling for the client.

use crate::config::ConfigError;
use reqwest::StatusCode;

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Engine error: {0}")]
    Engine(#[from] movie_catalog_engine::Error),

    /// The local mutation was committed but the remote write failed, so the
    /// store no longer matches the server.
    #[error("{action} applied locally but the server write failed: {source}")]
    WriteRejected {
        action: &'static str,
        #[source]
        source: Box<ClientError>,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            ClientError::WriteRejected { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Whether local state is known to differ from the server.
    pub fn is_desync(&self) -> bool {
        matches!(self, ClientError::WriteRejected { .. })
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
