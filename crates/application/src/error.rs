//! Application error types

use thiserror::Error;

use lionboard_domain::{DomainError, ResponseSpec};

use crate::ports::TransportError;

/// A non-2xx HTTP response captured for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpFailure {
    /// Creates a new `HttpFailure`.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns the body as UTF-8 text, lossily.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl From<ResponseSpec> for HttpFailure {
    fn from(response: ResponseSpec) -> Self {
        Self::new(response.status.as_u16(), response.body)
    }
}

/// Errors surfaced by the request gateway.
///
/// Everything the gateway cannot resolve with its single
/// refresh-and-replay recovery propagates to the original caller as one
/// of these; the gateway never swallows a failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request failed validation before reaching the transport.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Network failure or timeout; never retried.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx response the gateway does not recover from.
    #[error("HTTP error: status {}", .0.status)]
    Http(HttpFailure),

    /// Authentication cannot be recovered: the refresh token was rejected,
    /// or no session was present to refresh.
    #[error("session expired: status {}", .0.status)]
    SessionExpired(HttpFailure),

    /// A response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl GatewayError {
    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(failure) | Self::SessionExpired(failure) => Some(failure.status),
            _ => None,
        }
    }
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
