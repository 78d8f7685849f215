//! Error normalization applied to every outbound request.
//!
//! Classification is by transport outcome first, then by status code.
//! A 401 also ends the local session.

use reqwest::StatusCode;

use super::error::ApiError;
use crate::session::SessionStore;

/// Turns raw request failures into `ApiError`, with the 401 side effect.
#[derive(Debug, Clone)]
pub struct ErrorNormalizer {
    session: SessionStore,
}

impl ErrorNormalizer {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// The request never produced a response.
    pub fn transport(&self, err: &reqwest::Error) -> ApiError {
        self.report(ApiError::Transport {
            message: transport_message(err),
        })
    }

    /// The server answered with a non-success status.
    pub fn status(&self, status: StatusCode, body: &[u8]) -> ApiError {
        let err = classify_status(status, body);
        if matches!(err, ApiError::Unauthorized) {
            self.session.logout();
        }
        self.report(err)
    }

    /// The server answered with success but the body did not decode.
    pub fn decode(&self, err: &serde_json::Error) -> ApiError {
        self.report(ApiError::InvalidResponse {
            message: err.to_string(),
        })
    }

    /// Log once and hand back.
    pub fn report(&self, err: ApiError) -> ApiError {
        tracing::error!(kind = err.kind(), status = ?err.status(), "HTTP Error: {}", err);
        err
    }
}

/// Pure status classification.
pub fn classify_status(status: StatusCode, body: &[u8]) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::INTERNAL_SERVER_ERROR => ApiError::ServerError,
        other => ApiError::Unclassified {
            status: other.as_u16(),
            message: server_message(body)
                .unwrap_or_else(|| format!("Error Code: {}", other.as_u16())),
        },
    }
}

/// The `message` field of a JSON error body, if there is a non-empty one.
fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// reqwest's top-level message plus the innermost cause, which is usually
/// the part that says what actually went wrong (refused, DNS, TLS).
fn transport_message(err: &reqwest::Error) -> String {
    let mut root: &dyn std::error::Error = err;
    while let Some(source) = root.source() {
        root = source;
    }

    let top = err.to_string();
    let cause = root.to_string();
    if cause == top {
        top
    } else {
        format!("{}: {}", top, cause)
    }
}
