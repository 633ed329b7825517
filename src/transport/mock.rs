use std::sync::Arc;

use async_trait::async_trait;

use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Mock transport for internal testing
///
/// Used by unit tests to stub API responses without a network connection or
/// a mock HTTP server. The handler receives the full transport request, so
/// tests can also assert on the URL the client built.
#[derive(Clone)]
pub(crate) struct MockTransport {
    handler: Arc<dyn Fn(TransportRequest) -> TransportResponse + Send + Sync>,
}

impl MockTransport {
    /// Create a new mock transport with a custom request handler
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(TransportRequest) -> TransportResponse + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Create a mock transport that always returns 200 OK with an empty body
    pub fn ok() -> Self {
        Self::new(|_| TransportResponse::new(200))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, crate::protocol::error::OpenGraphError> {
        Ok((self.handler)(request))
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport").finish()
    }
}
