//! Client builder for constructing OpenGraph.io clients

use crate::{
    client::{config::ClientConfig, site::OpenGraphClient},
    protocol::error::OpenGraphResult,
    transport::{HttpTransport, Transport},
};

/// Builder for constructing OpenGraph.io clients
///
/// The builder starts from the default HTTP transport; a custom transport
/// (for instance one with a request deadline, or a stub in tests) can be
/// swapped in with [`with_transport`](Self::with_transport).
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use opengraph_io::prelude::*;
/// use opengraph_io::transport::HttpTransport;
///
/// # fn example() -> Result<(), OpenGraphError> {
/// let client = OpenGraphClientBuilder::new("your-app-id")
///     .with_full_render(true)
///     .with_max_cache_age(3600)
///     .with_transport(HttpTransport::with_timeout(Duration::from_secs(30))?)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OpenGraphClientBuilder<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl OpenGraphClientBuilder<HttpTransport> {
    /// Create a new builder for the given API credential
    ///
    /// # Arguments
    ///
    /// * `app_id` - The API credential. Get one by signing up at
    ///   <https://www.opengraph.io/>. Validated when [`build`](Self::build)
    ///   is called.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(app_id),
            transport: HttpTransport::new(),
        }
    }
}

impl<T: Transport> OpenGraphClientBuilder<T> {
    /// Use a custom transport
    pub fn with_transport<U: Transport>(self, transport: U) -> OpenGraphClientBuilder<U> {
        OpenGraphClientBuilder {
            config: self.config,
            transport,
        }
    }

    /// Set the service path segment (default: "site")
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.config = self.config.with_service(service);
        self
    }

    /// Set the API version path segment (default: "1.1")
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.with_version(version);
        self
    }

    /// Allow or forbid cached results (default: allowed)
    pub fn with_cache_ok(mut self, cache_ok: bool) -> Self {
        self.config = self.config.with_cache_ok(cache_ok);
        self
    }

    /// Ask the server to fetch the target page through a proxy
    pub fn with_use_proxy(mut self, use_proxy: bool) -> Self {
        self.config = self.config.with_use_proxy(use_proxy);
        self
    }

    /// Request full page rendering before extraction
    pub fn with_full_render(mut self, full_render: bool) -> Self {
        self.config = self.config.with_full_render(full_render);
        self
    }

    /// Set the maximum acceptable cache age, in seconds
    pub fn with_max_cache_age(mut self, seconds: u64) -> Self {
        self.config = self.config.with_max_cache_age(seconds);
        self
    }

    /// Set the preferred response language
    pub fn with_accept_lang(mut self, lang: impl Into<String>) -> Self {
        self.config = self.config.with_accept_lang(lang);
        self
    }

    /// Set the elements to extract
    pub fn with_html_elements(mut self, elements: impl Into<String>) -> Self {
        self.config = self.config.with_html_elements(elements);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns [`OpenGraphError::Configuration`] if the credential is blank.
    /// Validation happens here, once; calls on the built client never
    /// re-validate.
    ///
    /// [`OpenGraphError::Configuration`]: crate::protocol::error::OpenGraphError::Configuration
    pub fn build(self) -> OpenGraphResult<OpenGraphClient<T>> {
        OpenGraphClient::new(self.transport, self.config)
    }
}

#[cfg(test)]
mod tests {
    use crate::transport::mock::MockTransport;

    use super::*;

    #[test]
    fn test_builder_with_defaults() {
        let client = OpenGraphClientBuilder::new("test-app-id").build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_rejects_blank_app_id() {
        assert!(OpenGraphClientBuilder::new("").build().is_err());
        assert!(OpenGraphClientBuilder::new("   ").build().is_err());
    }

    #[test]
    fn test_builder_with_mock_transport() {
        let client = OpenGraphClientBuilder::new("test-app-id")
            .with_transport(MockTransport::ok())
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_builder_all_options() {
        let client = OpenGraphClientBuilder::new("test-app-id")
            .with_service("site")
            .with_version("1.1")
            .with_cache_ok(false)
            .with_use_proxy(true)
            .with_full_render(true)
            .with_max_cache_age(600)
            .with_accept_lang("en-US")
            .with_html_elements("p,h1")
            .build()
            .unwrap();

        let config = client.config();
        assert!(!config.cache_ok);
        assert!(config.use_proxy);
        assert!(config.full_render);
        assert_eq!(config.max_cache_age, Some(600));
    }
}
