//! Error types for OpenGraph.io API operations

use thiserror::Error;

/// Main error type for OpenGraph.io client operations
#[derive(Debug, Error)]
pub enum OpenGraphError {
    /// Invalid client configuration (e.g. missing credential)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The API answered with a non-success HTTP status
    #[error("API request failed with status {status}: {message}")]
    Request {
        /// HTTP status code reported by the API
        status: u16,

        /// Diagnostic detail, taken from the error body when the API
        /// provides one
        message: String,

        /// Raw response body, preserved for diagnostics
        body: String,
    },

    /// Transport-level error (DNS, connection, decoding, etc.)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timeout error
    #[error("Request timeout")]
    Timeout,
}

/// Result type alias for OpenGraph.io operations
pub type OpenGraphResult<T> = Result<T, OpenGraphError>;

impl From<reqwest::Error> for OpenGraphError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenGraphError::Timeout
        } else if err.is_connect() {
            OpenGraphError::Transport(format!("Connection error: {}", err))
        } else {
            OpenGraphError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = OpenGraphError::Configuration("appId must be supplied".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: appId must be supplied"
        );
    }

    #[test]
    fn test_request_error_display_carries_status() {
        let err = OpenGraphError::Request {
            status: 404,
            message: "Not Found".into(),
            body: r#"{"message":"Not Found"}"#.into(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 404: Not Found"
        );
    }
}
