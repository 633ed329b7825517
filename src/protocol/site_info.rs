//! Site info request construction
//!
//! A [`SiteInfoRequest`] pairs a target URL with the effective configuration
//! for one call and knows how to render itself as the API request URL.

use url::form_urlencoded;

use crate::client::ClientConfig;

/// Base URL of the OpenGraph.io API
const API_BASE_URL: &str = "https://opengraph.io/api";

/// A single site info request against the OpenGraph.io API
///
/// The request owns the effective configuration for the call: either the
/// client's instance configuration or the result of merging per-call
/// overrides onto it.
#[derive(Debug, Clone)]
pub struct SiteInfoRequest {
    target_url: String,
    config: ClientConfig,
}

impl SiteInfoRequest {
    /// Create a new site info request
    ///
    /// # Arguments
    ///
    /// * `target_url` - The web address to extract metadata from. It is not
    ///   validated as a well-formed URL; it is form-encoded verbatim.
    /// * `config` - The effective configuration for this call
    pub fn new(target_url: impl Into<String>, config: ClientConfig) -> Self {
        Self {
            target_url: target_url.into(),
            config,
        }
    }

    /// The endpoint path for this request, with the target URL embedded as a
    /// form-encoded path segment
    pub fn endpoint(&self) -> String {
        let encoded: String = form_urlencoded::byte_serialize(self.target_url.as_bytes()).collect();

        format!(
            "{}/{}/{}/{}",
            API_BASE_URL, self.config.version, self.config.service, encoded
        )
    }

    /// The query parameters for this request, in emission order
    ///
    /// `cache_ok` and `use_proxy` are always present. The remaining
    /// parameters are emitted only when set: `full_render` never emits
    /// "false", and blank strings count as unset.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let config = &self.config;

        let mut params = vec![
            ("cache_ok", bool_str(config.cache_ok).to_string()),
            ("use_proxy", bool_str(config.use_proxy).to_string()),
        ];

        if !config.app_id.trim().is_empty() {
            params.push(("app_id", config.app_id.clone()));
        }
        if config.full_render {
            params.push(("full_render", "true".to_string()));
        }
        if let Some(age) = config.max_cache_age {
            params.push(("max_cache_age", age.to_string()));
        }
        if let Some(lang) = &config.accept_lang {
            if !lang.trim().is_empty() {
                params.push(("accept_lang", lang.clone()));
            }
        }
        if let Some(elements) = &config.html_elements {
            if !elements.trim().is_empty() {
                params.push(("html_elements", elements.clone()));
            }
        }

        params
    }

    /// The form-encoded query string for this request
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_params() {
            serializer.append_pair(key, &value);
        }

        serializer.finish()
    }

    /// The full request URL: endpoint plus `?`-prefixed query string
    pub fn url(&self) -> String {
        format!("{}?{}", self.endpoint(), self.query_string())
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("test-app-id")
    }

    #[test]
    fn test_endpoint_embeds_encoded_target() {
        let request = SiteInfoRequest::new("https://example.com/a b", config());

        assert_eq!(
            request.endpoint(),
            "https://opengraph.io/api/1.1/site/https%3A%2F%2Fexample.com%2Fa+b"
        );
    }

    #[test]
    fn test_endpoint_uses_configured_version_and_service() {
        let config = config().with_version("1.0").with_service("extract");
        let request = SiteInfoRequest::new("https://example.com", config);

        assert!(request
            .endpoint()
            .starts_with("https://opengraph.io/api/1.0/extract/"));
    }

    #[test]
    fn test_query_defaults() {
        let request = SiteInfoRequest::new("https://example.com", config());

        assert_eq!(
            request.query_string(),
            "cache_ok=true&use_proxy=false&app_id=test-app-id"
        );
    }

    #[test]
    fn test_full_render_emitted_only_when_true() {
        let request = SiteInfoRequest::new("https://example.com", config().with_full_render(true));
        assert!(request.query_string().contains("full_render=true"));

        let request = SiteInfoRequest::new("https://example.com", config().with_full_render(false));
        assert!(!request.query_string().contains("full_render"));
    }

    #[test]
    fn test_max_cache_age_emitted_only_when_set() {
        let request =
            SiteInfoRequest::new("https://example.com", config().with_max_cache_age(3600));
        assert!(request.query_string().contains("max_cache_age=3600"));

        let request = SiteInfoRequest::new("https://example.com", config());
        assert!(!request.query_string().contains("max_cache_age"));
    }

    #[test]
    fn test_blank_optional_strings_are_omitted() {
        let config = config().with_accept_lang("  ").with_html_elements("");
        let request = SiteInfoRequest::new("https://example.com", config);

        let query = request.query_string();
        assert!(!query.contains("accept_lang"));
        assert!(!query.contains("html_elements"));
    }

    #[test]
    fn test_query_values_are_form_encoded() {
        let config = config().with_html_elements("p,h1,h2");
        let request = SiteInfoRequest::new("https://example.com", config);

        assert!(request.query_string().contains("html_elements=p%2Ch1%2Ch2"));
    }

    #[test]
    fn test_url_joins_endpoint_and_query() {
        let request = SiteInfoRequest::new("https://example.com", config());

        assert_eq!(
            request.url(),
            "https://opengraph.io/api/1.1/site/https%3A%2F%2Fexample.com\
             ?cache_ok=true&use_proxy=false&app_id=test-app-id"
        );
    }
}
