//! HTTP transport implementation using reqwest

use std::time::Duration;

use async_trait::async_trait;

use crate::protocol::error::OpenGraphError;

use super::{Transport, TransportRequest, TransportResponse};

/// HTTP transport backed by a shared [`reqwest::Client`]
///
/// One client is reused across calls; reqwest pools connections internally,
/// so cloning this transport or calling it concurrently is cheap and safe.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new HTTP transport with default settings
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create an HTTP transport with a request deadline applied to every call
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying client cannot be built
    pub fn with_timeout(timeout: Duration) -> Result<Self, OpenGraphError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    /// Create an HTTP transport from a custom reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, OpenGraphError> {
        let mut req_builder = self.client.get(&request.url);

        for (key, value) in request.headers {
            req_builder = req_builder.header(key, value);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
