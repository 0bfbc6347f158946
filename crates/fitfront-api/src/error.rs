//! Error type for backend API calls.

use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. `detail` holds
    /// the optional message from the error body, to be surfaced to
    /// the user verbatim when present.
    #[error("server rejected request: status {status}{}", detail_suffix(.detail))]
    Server {
        status: u16,
        detail: Option<String>,
    },

    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The server's `detail` message, when one was sent.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}
