//! Transport abstraction layer
//!
//! The OpenGraph.io API is a single stateless GET exchange, so the transport
//! seam is deliberately small: one async [`Transport::execute`] operation
//! over a fully built request URL.

pub mod http;
#[cfg(test)]
pub mod mock;

use std::collections::HashMap;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;

use crate::protocol::error::OpenGraphError;

/// A request handed to the transport for execution
///
/// The URL is fully built by the protocol layer (path, encoding, and query
/// string included); the transport only adds headers and performs the GET.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// The complete request URL
    pub url: String,

    /// Headers for the request
    pub headers: HashMap<String, String>,
}

impl TransportRequest {
    /// Create a new transport request for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// A response produced by the transport
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Response body as bytes
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a new transport response
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Set the response body
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Core transport trait for executing API requests
///
/// Implemented by [`HttpTransport`] for real network calls and by the test
/// mock for exercising the client without one. Implementations must be safe
/// to call concurrently; each execution scopes its own connection resources
/// to the call.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Execute a GET request asynchronously
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, OpenGraphError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_predicate() {
        assert!(TransportResponse::new(200).is_success());
        assert!(TransportResponse::new(204).is_success());
        assert!(!TransportResponse::new(301).is_success());
        assert!(!TransportResponse::new(404).is_success());
        assert!(!TransportResponse::new(500).is_success());
    }

    #[test]
    fn test_request_builder_collects_headers() {
        let request = TransportRequest::new("https://opengraph.io/api/1.1/site/x")
            .header("Accept", "application/json");

        assert_eq!(
            request.headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }
}
