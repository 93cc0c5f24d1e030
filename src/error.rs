//! Upstream failure categories
//!
//! Every variant is collapsed into the same "upstream unavailable" outcome at
//! the tool boundary; the distinction only shows up in logs.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(StatusCode),

    #[error("invalid JSON body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // A connect timeout reports both flags; treat it as a timeout.
        if e.is_timeout() {
            FetchError::Timeout(e)
        } else if e.is_connect() {
            FetchError::Connect(e)
        } else if let Some(status) = e.status() {
            FetchError::Status(status)
        } else if e.is_decode() {
            FetchError::Decode(e)
        } else {
            FetchError::Request(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "request failed with status: 404 Not Found");
    }

    #[test]
    fn test_builder_error_is_request() {
        // Relative URLs are rejected before anything goes on the wire
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Request(_)));
    }
}
