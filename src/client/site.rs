//! High-level OpenGraph.io client

use crate::{
    client::config::{ClientConfig, RequestOverrides},
    protocol::{
        error::{OpenGraphError, OpenGraphResult},
        site_info::SiteInfoRequest,
    },
    transport::{Transport, TransportRequest, TransportResponse},
};

/// Client for the OpenGraph.io metadata extraction API
///
/// The client owns its transport and a validated, immutable configuration,
/// so a single instance can serve any number of concurrent calls. Each call
/// issues exactly one GET request and returns the response body verbatim;
/// interpreting the payload is left to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use opengraph_io::prelude::*;
///
/// # async fn example() -> Result<(), OpenGraphError> {
/// let client = OpenGraphClientBuilder::new("your-app-id").build()?;
///
/// let body = client.fetch_site_info("https://example.com").await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
pub struct OpenGraphClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T> OpenGraphClient<T>
where
    T: Transport,
{
    /// Create a new client from a transport and configuration
    ///
    /// # Errors
    ///
    /// Returns [`OpenGraphError::Configuration`] if the configuration is
    /// invalid. This is the only place validation happens; calls never
    /// re-validate.
    pub fn new(transport: T, config: ClientConfig) -> OpenGraphResult<Self> {
        config.validate()?;

        Ok(Self { transport, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch site metadata for a target URL
    ///
    /// # Arguments
    ///
    /// * `target_url` - The web address to extract metadata from
    ///
    /// # Returns
    ///
    /// The raw response body as text, typically JSON, returned unparsed
    ///
    /// # Errors
    ///
    /// [`OpenGraphError::Request`] on a non-success HTTP status, or a
    /// transport-level error if the call itself fails. Errors surface
    /// immediately; nothing is retried.
    pub async fn fetch_site_info(&self, target_url: &str) -> OpenGraphResult<String> {
        self.execute(SiteInfoRequest::new(target_url, self.config.clone()))
            .await
    }

    /// Fetch site metadata with per-call configuration overrides
    ///
    /// Override fields are merged onto the instance configuration for this
    /// call only; the client's own configuration is untouched.
    pub async fn fetch_site_info_with(
        &self,
        target_url: &str,
        overrides: &RequestOverrides,
    ) -> OpenGraphResult<String> {
        self.execute(SiteInfoRequest::new(
            target_url,
            self.config.merged(overrides),
        ))
        .await
    }

    async fn execute(&self, request: SiteInfoRequest) -> OpenGraphResult<String> {
        let transport_request =
            TransportRequest::new(request.url()).header("Accept", "application/json");

        tracing::debug!(url = %transport_request.url, "fetching site info");

        let response = self.transport.execute(transport_request).await?;

        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        String::from_utf8(response.body.to_vec()).map_err(|e| {
            OpenGraphError::Transport(format!("response body is not valid UTF-8: {e}"))
        })
    }
}

/// Classify a non-success response, preserving the body for diagnostics
///
/// API error responses usually carry a JSON object with a `message` field;
/// when one is present it becomes the error detail, otherwise a body excerpt
/// is used.
fn error_from_response(response: &TransportResponse) -> OpenGraphError {
    let body = String::from_utf8_lossy(&response.body).into_owned();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| excerpt(&body));

    OpenGraphError::Request {
        status: response.status,
        message,
        body,
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "(no response body)".to_string();
    }

    trimmed.chars().take(200).collect()
}
