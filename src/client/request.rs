use core::fmt;
use std::collections::BTreeMap;

use tracing::debug;

use super::config::{ApiType, ClientConfig};
use super::RequestError;
use crate::ser::Serializable;

/// Content types used on request and response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    /// `application/json`
    Json,
    /// `application/x-bcs`
    Bcs,
    /// `application/x.aptos.signed_transaction+bcs`
    BcsSignedTransaction,
}

impl MimeType {
    /// MIME string sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            MimeType::Json => "application/json",
            MimeType::Bcs => "application/x-bcs",
            MimeType::BcsSignedTransaction => "application/x.aptos.signed_transaction+bcs",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of one outbound POST call.
///
/// The body is opaque here: it is whatever bytes the canonical serializer
/// produced, and nothing in this type inspects them. Sending the request is
/// left to whichever HTTP client the caller uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub api: ApiType,
    /// Resolved base URL for [`Self::api`].
    pub base_url: String,
    /// Name of the calling operation, kept for error reporting.
    pub origin_method: String,
    pub path: String,
    pub content_type: MimeType,
    pub accept_type: MimeType,
    pub params: BTreeMap<String, String>,
    /// Config defaults merged with per-request overrides.
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl PostRequest {
    /// Creates a JSON request with an empty body.
    pub fn new(
        config: &ClientConfig,
        api: ApiType,
        origin_method: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            api,
            base_url: config.request_url(api)?,
            origin_method: origin_method.into(),
            path: path.into(),
            content_type: MimeType::Json,
            accept_type: MimeType::Json,
            params: BTreeMap::new(),
            headers: config.headers.clone(),
            body: Vec::new(),
        })
    }

    /// Creates a request whose body is the canonical encoding of `value`.
    pub fn bcs<T: Serializable + ?Sized>(
        config: &ClientConfig,
        api: ApiType,
        origin_method: impl Into<String>,
        path: impl Into<String>,
        value: &T,
    ) -> Result<Self, RequestError> {
        let body = crate::serialize(value)?;
        let mut request = Self::new(config, api, origin_method, path)?;
        debug!(
            api = %request.api,
            origin_method = %request.origin_method,
            path = %request.path,
            body_len = body.len(),
            "prepared bcs request"
        );
        request.content_type = MimeType::Bcs;
        request.body = body;
        Ok(request)
    }

    /// Replaces the `Content-Type` of the body.
    pub fn with_content_type(mut self, content_type: MimeType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Replaces the expected response content type.
    pub fn with_accept_type(mut self, accept_type: MimeType) -> Self {
        self.accept_type = accept_type;
        self
    }

    /// Adds a query parameter; `None` values are skipped.
    pub fn with_param<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.params.insert(name.into(), value.to_string());
        }
        self
    }

    /// Overrides (or adds) a header for this request only.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Base URL joined with the request path.
    pub fn url(&self) -> String {
        let path = self.path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
