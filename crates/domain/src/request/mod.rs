//! Outbound request types
//!
//! An [`OutboundRequest`] is transient: constructed per call, mutated by
//! the gateway (credential injection, default merging), and handed to the
//! transport.

mod headers;
mod method;
mod query;

pub use headers::{AUTHORIZATION, Headers};
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};

use serde_json::Value;
use url::Url;

use crate::error::{DomainError, DomainResult};

/// An outbound HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Path relative to the gateway's base address.
    pub path: String,
    /// Request headers.
    pub headers: Headers,
    /// Query parameters.
    pub params: QueryParams,
    /// JSON request body, if any.
    pub body: Option<Value>,
}

impl OutboundRequest {
    /// Creates a request with no headers, parameters, or body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Headers::new(),
            params: QueryParams::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    /// Creates a PUT request with a JSON body.
    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Put, path).with_body(body)
    }

    /// Creates a PATCH request with a JSON body.
    #[must_use]
    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Patch, path).with_body(body)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(key, value);
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Resolves the absolute URL for this request against `base`,
    /// including the encoded query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined onto the base
    /// address or the parameters cannot be encoded.
    pub fn full_url(&self, base: &Url) -> DomainResult<Url> {
        let mut url = base
            .join(&self.path)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.path)))?;

        if !self.params.is_empty() {
            let query = serde_urlencoded::to_string(self.params.pairs())
                .map_err(|e| DomainError::InvalidQuery(e.to_string()))?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}
