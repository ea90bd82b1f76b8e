//! Failure taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! Detection lives here and is pure: a status code (plus optional server
//! detail) maps to an [`ApiError`], and each error knows the notice it should
//! raise. `client::FailureEffects` performs the side effects.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::notify::Notice;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired, please sign in again";
pub const FORBIDDEN_MESSAGE: &str = "Access denied";
pub const NOT_FOUND_MESSAGE: &str = "The requested resource does not exist";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const NETWORK_ANOMALY_MESSAGE: &str = "Network connection anomaly";
pub const NETWORK_UNREACHABLE_MESSAGE: &str = "Network connection failed, please check your network";

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("internal server error")]
    Server,
    #[error("http error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Http { status: u16, detail: Option<String> },
    #[error("no response: {0}")]
    Network(#[from] TransportError),
    /// A 2xx body that did not match the expected schema.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::Server,
            _ => Self::Http { status, detail },
        }
    }

    /// Whether the session must be torn down.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Notice raised by the response interceptor, if any.
    pub fn notice(&self) -> Option<Notice> {
        let message = match self {
            Self::Unauthorized => SESSION_EXPIRED_MESSAGE,
            Self::Forbidden => FORBIDDEN_MESSAGE,
            Self::NotFound => NOT_FOUND_MESSAGE,
            Self::Server => SERVER_ERROR_MESSAGE,
            Self::Http { detail: Some(detail), .. } => return Some(Notice::error(detail.clone())),
            Self::Http { detail: None, .. } => NETWORK_ANOMALY_MESSAGE,
            Self::Network(_) => NETWORK_UNREACHABLE_MESSAGE,
            Self::Decode(_) => return None,
        };
        Some(Notice::error(message))
    }
}

/// Pull a string `detail` out of an error body such as `{"detail": "..."}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}
