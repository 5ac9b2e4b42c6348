//! Transport port

use std::future::Future;

use thiserror::Error;
use url::Url;

use lionboard_domain::{OutboundRequest, ResponseSpec};

/// Errors raised by the transport layer itself.
///
/// A response with a non-2xx status is not a transport error: the
/// transport hands it back as a [`ResponseSpec`] and the gateway decides
/// what the status means.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No response arrived within the configured bound.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The bound that was exceeded.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error text.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport-level failure.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// gateway to be exercised against a scripted transport in tests.
pub trait Transport: Send + Sync {
    /// Resolves `request` against `base` and executes it.
    ///
    /// Returns the raw response for *any* HTTP status.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response exists at all: network
    /// failure, timeout, or a URL that cannot be constructed.
    fn execute(
        &self,
        base: &Url,
        request: &OutboundRequest,
        timeout_ms: u64,
    ) -> impl Future<Output = Result<ResponseSpec, TransportError>> + Send;
}
