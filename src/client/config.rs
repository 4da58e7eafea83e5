use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RequestError;

/// Family of remote endpoints a request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiType {
    /// Full node REST API; accepts BCS request bodies.
    Fullnode,
    /// Indexer query API.
    Indexer,
    /// Test-network faucet.
    Faucet,
}

impl ApiType {
    /// Name used in config files and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            ApiType::Fullnode => "fullnode",
            ApiType::Indexer => "indexer",
            ApiType::Faucet => "faucet",
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base URLs and default headers shared by every outbound request.
///
/// Usually loaded from TOML:
///
/// ```toml
/// fullnode = "http://127.0.0.1:8080/v1"
/// faucet = "http://127.0.0.1:8081"
///
/// [headers]
/// x-client = "chainbytes"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullnode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faucet: Option<String>,
    /// Headers attached to every request unless overridden per request.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Endpoints of a node, faucet and indexer running on the local machine
    /// with their default ports.
    pub fn local() -> Self {
        Self {
            fullnode: Some("http://127.0.0.1:8080/v1".to_owned()),
            indexer: Some("http://127.0.0.1:8090/v1/graphql".to_owned()),
            faucet: Some("http://127.0.0.1:8081".to_owned()),
            headers: BTreeMap::new(),
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RequestError> {
        Ok(toml::from_str(text)?)
    }

    /// Sets the base URL for `api`.
    pub fn with_endpoint(mut self, api: ApiType, url: impl Into<String>) -> Self {
        let url = Some(url.into());
        match api {
            ApiType::Fullnode => self.fullnode = url,
            ApiType::Indexer => self.indexer = url,
            ApiType::Faucet => self.faucet = url,
        }
        self
    }

    /// Adds a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Base URL configured for `api`, if any.
    pub fn endpoint(&self, api: ApiType) -> Option<&str> {
        match api {
            ApiType::Fullnode => self.fullnode.as_deref(),
            ApiType::Indexer => self.indexer.as_deref(),
            ApiType::Faucet => self.faucet.as_deref(),
        }
    }

    /// Base URL for `api` with any trailing slash removed.
    pub fn request_url(&self, api: ApiType) -> Result<String, RequestError> {
        self.endpoint(api)
            .map(|url| url.trim_end_matches('/').to_owned())
            .ok_or(RequestError::MissingEndpoint { api })
    }
}
