//! Outbound request shape that canonical payloads travel through.
//!
//! Only the boundary is modelled: endpoint configuration, content types and
//! the request record. Transport, retries and response parsing are out of
//! scope for this crate.

mod config;
mod request;

use thiserror::Error;

pub use config::{ApiType, ClientConfig};
pub use request::{MimeType, PostRequest};

use crate::ser::RangeError;

/// Failures while preparing a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// No base URL is configured for the requested API.
    #[error("no endpoint configured for the {api} api")]
    MissingEndpoint { api: ApiType },
    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] RangeError),
    /// The configuration text was not valid TOML for [`ClientConfig`].
    #[error("invalid client config: {0}")]
    Config(#[from] toml::de::Error),
}
