//! Client configuration
//!
//! [`ClientConfig`] holds the resolved instance defaults; [`RequestOverrides`]
//! is the per-call surface, merged field-wise onto those defaults.

use crate::protocol::error::{OpenGraphError, OpenGraphResult};

/// Configuration for an OpenGraph.io client
///
/// Defaults are applied when the config is created and the result is
/// immutable once the client is built, so concurrent calls can share it
/// without locking.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credential, sent as the `app_id` query parameter
    pub app_id: String,

    /// API service path segment
    pub service: String,

    /// API version path segment
    pub version: String,

    /// Whether the server may answer with a cached extraction result
    pub cache_ok: bool,

    /// Whether the server should fetch the target page through a proxy
    pub use_proxy: bool,

    /// Request full page rendering before extraction
    pub full_render: bool,

    /// Maximum age (seconds) of an acceptable cached result
    pub max_cache_age: Option<u64>,

    /// Preferred response language
    pub accept_lang: Option<String>,

    /// CSS-selector-like list of elements to extract
    pub html_elements: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            service: "site".to_string(),
            version: "1.1".to_string(),
            cache_ok: true,
            use_proxy: false,
            full_render: false,
            max_cache_age: None,
            accept_lang: None,
            html_elements: None,
        }
    }

    /// Set the service path segment
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Set the API version path segment
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Allow or forbid cached results
    pub fn with_cache_ok(mut self, cache_ok: bool) -> Self {
        self.cache_ok = cache_ok;
        self
    }

    /// Ask the server to fetch the target page through a proxy
    pub fn with_use_proxy(mut self, use_proxy: bool) -> Self {
        self.use_proxy = use_proxy;
        self
    }

    /// Request full page rendering before extraction
    pub fn with_full_render(mut self, full_render: bool) -> Self {
        self.full_render = full_render;
        self
    }

    /// Set the maximum acceptable cache age, in seconds
    pub fn with_max_cache_age(mut self, seconds: u64) -> Self {
        self.max_cache_age = Some(seconds);
        self
    }

    /// Set the preferred response language
    pub fn with_accept_lang(mut self, lang: impl Into<String>) -> Self {
        self.accept_lang = Some(lang.into());
        self
    }

    /// Set the elements to extract
    pub fn with_html_elements(mut self, elements: impl Into<String>) -> Self {
        self.html_elements = Some(elements.into());
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`OpenGraphError::Configuration`] if `app_id` is blank.
    /// Called once at client construction, never per call.
    pub fn validate(&self) -> OpenGraphResult<()> {
        if self.app_id.trim().is_empty() {
            return Err(OpenGraphError::Configuration(
                "an app_id must be supplied when making requests to the API; \
                 get a free app_id by signing up at https://www.opengraph.io/"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Merge per-call overrides onto this configuration
    ///
    /// Field-level merge: only the fields the override sets are replaced,
    /// everything else keeps the instance's already-defaulted value. The
    /// merged config is transient and discarded after the call.
    pub fn merged(&self, overrides: &RequestOverrides) -> ClientConfig {
        let mut config = self.clone();

        if let Some(app_id) = &overrides.app_id {
            config.app_id = app_id.clone();
        }
        if let Some(service) = &overrides.service {
            config.service = service.clone();
        }
        if let Some(version) = &overrides.version {
            config.version = version.clone();
        }
        if let Some(cache_ok) = overrides.cache_ok {
            config.cache_ok = cache_ok;
        }
        if let Some(use_proxy) = overrides.use_proxy {
            config.use_proxy = use_proxy;
        }
        if let Some(full_render) = overrides.full_render {
            config.full_render = full_render;
        }
        if let Some(age) = overrides.max_cache_age {
            config.max_cache_age = Some(age);
        }
        if let Some(lang) = &overrides.accept_lang {
            config.accept_lang = Some(lang.clone());
        }
        if let Some(elements) = &overrides.html_elements {
            config.html_elements = Some(elements.clone());
        }

        config
    }
}

/// Per-call configuration overrides
///
/// Every field is optional; unset fields keep the client's instance value.
/// Note an override may set `app_id` to a blank string: the merged config is
/// not re-validated, the blank credential is simply left out of the query.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    /// Replace the API credential for this call
    pub app_id: Option<String>,

    /// Replace the service path segment for this call
    pub service: Option<String>,

    /// Replace the API version path segment for this call
    pub version: Option<String>,

    /// Replace the cached-results flag for this call
    pub cache_ok: Option<bool>,

    /// Replace the proxy flag for this call
    pub use_proxy: Option<bool>,

    /// Replace the full-render flag for this call
    pub full_render: Option<bool>,

    /// Replace the maximum cache age for this call
    pub max_cache_age: Option<u64>,

    /// Replace the preferred response language for this call
    pub accept_lang: Option<String>,

    /// Replace the extracted elements list for this call
    pub html_elements: Option<String>,
}

impl RequestOverrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the API credential for this call
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Replace the service path segment for this call
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Replace the API version path segment for this call
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Replace the cached-results flag for this call
    pub fn with_cache_ok(mut self, cache_ok: bool) -> Self {
        self.cache_ok = Some(cache_ok);
        self
    }

    /// Replace the proxy flag for this call
    pub fn with_use_proxy(mut self, use_proxy: bool) -> Self {
        self.use_proxy = Some(use_proxy);
        self
    }

    /// Replace the full-render flag for this call
    pub fn with_full_render(mut self, full_render: bool) -> Self {
        self.full_render = Some(full_render);
        self
    }

    /// Replace the maximum cache age for this call
    pub fn with_max_cache_age(mut self, seconds: u64) -> Self {
        self.max_cache_age = Some(seconds);
        self
    }

    /// Replace the preferred response language for this call
    pub fn with_accept_lang(mut self, lang: impl Into<String>) -> Self {
        self.accept_lang = Some(lang.into());
        self
    }

    /// Replace the extracted elements list for this call
    pub fn with_html_elements(mut self, elements: impl Into<String>) -> Self {
        self.html_elements = Some(elements.into());
        self
    }
}
