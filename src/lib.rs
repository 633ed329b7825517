//! # OpenGraph.io client
//!
//! A minimal async client for the [OpenGraph.io](https://www.opengraph.io/)
//! metadata extraction API.
//!
//! The client builds the request URL for a target page, issues a single
//! HTTP GET, and hands back the raw response body as text. It deliberately
//! does not parse the payload, retry, rate-limit, or cache; interpreting
//! the returned JSON is the caller's business.
//!
//! ## Example
//!
//! ```rust,no_run
//! use opengraph_io::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenGraphClientBuilder::new("your-app-id")
//!         .with_full_render(true)
//!         .build()?;
//!
//!     let body = client.fetch_site_info("https://example.com").await?;
//!     println!("{body}");
//!
//!     Ok(())
//! }
//! ```
//!
//! Per-call overrides merge onto the client's defaults field by field:
//!
//! ```rust,no_run
//! # use opengraph_io::prelude::*;
//! # async fn example(client: opengraph_io::OpenGraphClient<opengraph_io::transport::HttpTransport>) -> Result<(), OpenGraphError> {
//! let overrides = RequestOverrides::new().with_max_cache_age(300);
//! let body = client
//!     .fetch_site_info_with("https://example.com", &overrides)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod protocol;
pub mod transport;

pub use client::{ClientConfig, OpenGraphClient, OpenGraphClientBuilder, RequestOverrides};
pub use protocol::{OpenGraphError, OpenGraphResult, SiteInfoRequest};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        client::{ClientConfig, OpenGraphClient, OpenGraphClientBuilder, RequestOverrides},
        protocol::error::{OpenGraphError, OpenGraphResult},
    };
}
