//! Client error types.

use thiserror::Error;

/// Result type for transport and service calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the transport and propagated unchanged by services
/// and facades.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error: status {status}")]
    Transport { status: u16 },

    /// The call was aborted through its cancellation token.
    #[error("request cancelled")]
    Cancelled,

    /// The server has no entity with this id (a 404 on a single-record read).
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status, when the failure came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport { status } => Some(*status),
            ClientError::NotFound { .. } => Some(404),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    /// Specializes a 404 into [`ClientError::NotFound`]; anything else is
    /// returned as-is.
    pub fn into_not_found(self, entity: &'static str, id: &str) -> Self {
        match self {
            ClientError::Transport { status: 404 } => ClientError::NotFound {
                entity,
                id: id.to_string(),
            },
            other => other,
        }
    }
}
