//! Upstream error types
//!
//! Errors raised while talking to the remote artist API or any other
//! JSON-over-HTTP dependency reached through an [`HttpTransport`].
//!
//! [`HttpTransport`]: super::HttpTransport

use thiserror::Error;

/// Errors that can occur while fetching a remote resource.
///
/// The variants only carry owned strings so one failed refresh can be
/// handed to every caller waiting on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Transport failure before a response was received
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with something other than 200 OK
    #[error("Unexpected status {status}: {body}")]
    Fetch { status: u16, body: String },

    /// The body was not valid JSON for the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Decode(err.to_string())
    }
}

/// Result type alias for upstream operations
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UpstreamError::Fetch {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected status 503: maintenance");

        let err = UpstreamError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_from_serde_error() {
        let err: UpstreamError = serde_json::from_str::<Vec<u32>>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, UpstreamError::Decode(_)));
    }
}
