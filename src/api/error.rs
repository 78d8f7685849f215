//! The one error type callers of the API layer ever see.

use thiserror::Error;

use crate::storage::StorageError;

/// Normalized failure of an API operation.
///
/// The `Display` output is the human-readable message meant for the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached us.
    #[error("Error: {message}")]
    Transport { message: String },

    /// 401: the held token is no longer valid.
    #[error("Unauthorized. Please login again.")]
    Unauthorized,

    /// 403
    #[error("Access forbidden.")]
    Forbidden,

    /// 404
    #[error("Resource not found.")]
    NotFound,

    /// 500
    #[error("Internal server error.")]
    ServerError,

    /// Any other non-success status.
    #[error("{message}")]
    Unclassified { status: u16, message: String },

    /// Success status but the body was not what the endpoint promises.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// The session could not be persisted.
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// The HTTP client could not be set up.
    #[error("HTTP client error: {message}")]
    Client { message: String },
}

impl ApiError {
    /// Human-readable message for display.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status behind this error, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound => Some(404),
            ApiError::ServerError => Some(500),
            ApiError::Unclassified { status, .. } => Some(*status),
            ApiError::Transport { .. }
            | ApiError::InvalidResponse { .. }
            | ApiError::Storage(_)
            | ApiError::Client { .. } => None,
        }
    }

    /// Short machine-friendly kind, used in structured logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport_error",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Forbidden => "forbidden",
            ApiError::NotFound => "not_found",
            ApiError::ServerError => "server_error",
            ApiError::Unclassified { .. } => "unclassified_error",
            ApiError::InvalidResponse { .. } => "invalid_response",
            ApiError::Storage(_) => "storage_error",
            ApiError::Client { .. } => "client_error",
        }
    }
}
