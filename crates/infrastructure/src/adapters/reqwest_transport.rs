//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port using the reqwest
//! library. It handles all HTTP communication for the client.

use std::time::Duration;

use reqwest::{Client, Method};
use url::Url;

use lionboard_application::ports::{Transport, TransportError};
use lionboard_domain::{Headers, HttpMethod, OutboundRequest, ResponseSpec};

/// HTTP transport backed by `reqwest::Client`.
///
/// Returns the raw response for any HTTP status; only network-level
/// failures become errors. Redirects are followed up to 10 hops.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("lionboard/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts the domain method to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to the transport error taxonomy.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::Dns { host, message };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused { host };
            }
            return TransportError::ConnectionFailed(message);
        }

        TransportError::Other(error.to_string())
    }
}

impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        base: &Url,
        request: &OutboundRequest,
        timeout_ms: u64,
    ) -> Result<ResponseSpec, TransportError> {
        let url = request
            .full_url(base)
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(Duration::from_millis(timeout_ms));

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| TransportError::Other(format!("failed to encode body: {e}")))?;
            builder = builder.body(bytes);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();

        let mut headers = Headers::new();
        for (name, value) in response.headers() {
            headers.set(name.to_string(), value.to_str().unwrap_or("<binary>"));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(ResponseSpec::new(status, headers, body))
    }
}
