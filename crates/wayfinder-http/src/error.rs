//! Internal error types for navigation backend calls.
//!
//! These errors are internal to `wayfinder-http` and are mapped to the core
//! `ApiError` at the boundary.

use thiserror::Error;

/// Result type alias for backend calls.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors from talking to the navigation backend.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The backend answered with a non-success status.
    #[error("Navigation API request failed with status {status}: {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The `error` field of the response body, if it had one
        message: Option<String>,
        /// The URL that was requested
        url: String,
    },

    /// The backend answered with data that does not fit the contract.
    #[error("Invalid response from navigation API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
