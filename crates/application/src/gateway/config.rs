//! Gateway configuration

use url::Url;

use lionboard_domain::{Headers, QueryParams};

/// Default network timeout, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Default path exchanging a refresh token for a new access token.
pub const DEFAULT_REFRESH_PATH: &str = "/auth/refresh";

/// Default simulated-latency parameter the board API accepts.
const DEFAULT_DELAY_MS: &str = "500";

/// Construction-time configuration for a
/// [`RequestGateway`](crate::gateway::RequestGateway).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Fixed origin prepended to every relative path.
    pub base_address: Url,
    /// Abort the transport call if no response arrives within this bound.
    pub timeout_ms: u64,
    /// Headers applied to every request. Caller headers win on collision.
    pub default_headers: Headers,
    /// Query parameters merged into every request. Caller values win on
    /// key collision.
    pub default_params: QueryParams,
    /// Path exempt from access-token injection; requests to it carry the
    /// refresh token instead.
    pub refresh_path: String,
}

impl GatewayConfig {
    /// Starts a builder for the given API origin.
    #[must_use]
    pub fn builder(base_address: Url) -> GatewayConfigBuilder {
        GatewayConfigBuilder::new(base_address)
    }

    /// Configuration with the stock defaults for `base_address`.
    #[must_use]
    pub fn new(base_address: Url) -> Self {
        Self::builder(base_address).build()
    }
}

/// Builder for [`GatewayConfig`].
///
/// Starts from the stock defaults: a 15 second timeout, JSON content
/// negotiation headers, a `delay=500` parameter, and `/auth/refresh` as
/// the token exchange path.
#[derive(Debug, Clone)]
pub struct GatewayConfigBuilder {
    base_address: Url,
    timeout_ms: u64,
    default_headers: Headers,
    default_params: QueryParams,
    refresh_path: String,
}

impl GatewayConfigBuilder {
    fn new(base_address: Url) -> Self {
        let mut default_headers = Headers::new();
        default_headers.set("Content-Type", "application/json");
        default_headers.set("Accept", "application/json");

        let mut default_params = QueryParams::new();
        default_params.set("delay", DEFAULT_DELAY_MS);

        Self {
            base_address,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_headers,
            default_params,
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
        }
    }

    /// Sets the network timeout in milliseconds.
    #[must_use]
    pub const fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Sets the token exchange path.
    #[must_use]
    pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = path.into();
        self
    }

    /// Sets the `client-id` header identifying this client to the API.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.default_headers.set("client-id", client_id);
        self
    }

    /// Sets or replaces a default header.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.set(name, value);
        self
    }

    /// Sets or replaces a default query parameter.
    #[must_use]
    pub fn default_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_params.set(key, value);
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> GatewayConfig {
        GatewayConfig {
            base_address: self.base_address,
            timeout_ms: self.timeout_ms,
            default_headers: self.default_headers,
            default_params: self.default_params,
            refresh_path: self.refresh_path,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Url {
        Url::parse("https://11.fesp.shop").unwrap()
    }

    #[test]
    fn test_stock_defaults() {
        let config = GatewayConfig::new(base());
        assert_eq!(config.timeout_ms, 15_000);
        assert_eq!(config.refresh_path, "/auth/refresh");
        assert_eq!(config.default_params.get("delay"), Some("500"));
        assert_eq!(
            config.default_headers.get("content-type"),
            Some("application/json")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = GatewayConfig::builder(base())
            .timeout_ms(3_000)
            .client_id("00-board")
            .refresh_path("/token/refresh")
            .default_param("delay", "0")
            .build();

        assert_eq!(config.timeout_ms, 3_000);
        assert_eq!(config.refresh_path, "/token/refresh");
        assert_eq!(config.default_headers.get("client-id"), Some("00-board"));
        assert_eq!(config.default_params.get("delay"), Some("0"));
    }
}
