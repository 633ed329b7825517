//! Request construction and error types for the OpenGraph.io API

pub mod error;
pub mod site_info;

pub use error::{OpenGraphError, OpenGraphResult};
pub use site_info::SiteInfoRequest;
