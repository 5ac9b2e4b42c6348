//! Client facade and builder.
//!
//! Wires the default adapters (reqwest transport, file-backed session
//! store, in-memory router) into a [`RequestGateway`] behind a small
//! verb-based API.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use url::Url;

use lionboard_application::ports::{ReauthPrompt, SessionStore, SessionStoreError};
use lionboard_application::use_cases::{Login, LoginInput, Logout, RestoreSession};
use lionboard_application::{GatewayConfig, GatewayConfigBuilder, RequestGateway};
use lionboard_application::{GatewayResult, SessionHandle};
use lionboard_domain::{DomainError, OutboundRequest, ResponseSpec, Session};
use lionboard_infrastructure::{
    FileSessionRepository, LoginRedirect, MemoryRouter, NoopPrompt, ReqwestTransport,
};

/// Batteries-included client for the board API.
///
/// Construct with [`Client::builder`]. All calls go through the
/// authenticated request gateway; callers never touch the token
/// lifecycle.
pub struct Client {
    gateway: Arc<RequestGateway<ReqwestTransport>>,
    router: Arc<MemoryRouter>,
}

impl Client {
    /// Starts a builder for the given API origin.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_address` is not a valid URL.
    pub fn builder(base_address: &str) -> GatewayResult<ClientBuilder> {
        let base = Url::parse(base_address)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_address}")))?;
        Ok(ClientBuilder::new(base))
    }

    /// Sends a prepared request through the gateway.
    ///
    /// # Errors
    ///
    /// See [`lionboard_application::GatewayError`].
    pub async fn send(&self, request: OutboundRequest) -> GatewayResult<ResponseSpec> {
        self.gateway.send(request).await
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`lionboard_application::GatewayError`].
    pub async fn get(&self, path: &str) -> GatewayResult<ResponseSpec> {
        self.send(OutboundRequest::get(path)).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`lionboard_application::GatewayError`].
    pub async fn post(&self, path: &str, body: Value) -> GatewayResult<ResponseSpec> {
        self.send(OutboundRequest::post(path, body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`lionboard_application::GatewayError`].
    pub async fn put(&self, path: &str, body: Value) -> GatewayResult<ResponseSpec> {
        self.send(OutboundRequest::put(path, body)).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`lionboard_application::GatewayError`].
    pub async fn patch(&self, path: &str, body: Value) -> GatewayResult<ResponseSpec> {
        self.send(OutboundRequest::patch(path, body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`lionboard_application::GatewayError`].
    pub async fn delete(&self, path: &str) -> GatewayResult<ResponseSpec> {
        self.send(OutboundRequest::delete(path)).await
    }

    /// Authenticates and establishes the session.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors from the login call.
    pub async fn login(&self, email: &str, password: &str) -> GatewayResult<Session> {
        Login::new(self.gateway.as_ref())
            .execute(LoginInput::new(email, password))
            .await
    }

    /// Destroys the session and its persisted copy.
    pub async fn logout(&self) {
        Logout::new(self.gateway.session()).execute().await;
    }

    /// Loads the persisted session from a previous run.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn restore_session(&self) -> Result<Option<Session>, SessionStoreError> {
        RestoreSession::new(self.gateway.session()).execute().await
    }

    /// Returns a snapshot of the current session.
    pub async fn session(&self) -> Option<Session> {
        self.gateway.session().get().await
    }

    /// The navigation boundary; embedders observe login redirects here.
    #[must_use]
    pub fn router(&self) -> Arc<MemoryRouter> {
        self.router.clone()
    }

    /// The underlying gateway, for advanced wiring.
    #[must_use]
    pub fn gateway(&self) -> &RequestGateway<ReqwestTransport> {
        &self.gateway
    }
}

/// Builder for [`Client`].
///
/// Defaults: persisted session in the platform data directory, no
/// re-authentication prompt (headless), and the gateway's stock
/// configuration.
pub struct ClientBuilder {
    config: GatewayConfigBuilder,
    session_dir: Option<PathBuf>,
    persist: bool,
    prompt: Option<Arc<dyn ReauthPrompt>>,
    router: Arc<MemoryRouter>,
}

impl ClientBuilder {
    fn new(base_address: Url) -> Self {
        Self {
            config: GatewayConfig::builder(base_address),
            session_dir: None,
            persist: true,
            prompt: None,
            router: Arc::new(MemoryRouter::new()),
        }
    }

    /// Sets the `client-id` header identifying this client to the API.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config = self.config.client_id(client_id);
        self
    }

    /// Sets the network timeout in milliseconds.
    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config = self.config.timeout_ms(timeout_ms);
        self
    }

    /// Sets the token exchange path.
    #[must_use]
    pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.refresh_path(path);
        self
    }

    /// Sets or replaces a default query parameter.
    #[must_use]
    pub fn default_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.default_param(key, value);
        self
    }

    /// Sets or replaces a default header.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.default_header(name, value);
        self
    }

    /// Stores the session under `dir` instead of the platform data
    /// directory.
    #[must_use]
    pub fn session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }

    /// Keeps the session in memory only; nothing survives a restart.
    #[must_use]
    pub fn in_memory_session(mut self) -> Self {
        self.persist = false;
        self
    }

    /// Installs a custom re-authentication prompt.
    #[must_use]
    pub fn reauth_prompt(mut self, prompt: Arc<dyn ReauthPrompt>) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Installs a confirm callback; on approval the client navigates to
    /// the login route on its router.
    #[must_use]
    pub fn confirm_with<F>(mut self, confirm: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.prompt = Some(Arc::new(LoginRedirect::new(self.router.clone(), confirm)));
        self
    }

    /// Finishes the wiring.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn build(self) -> GatewayResult<Client> {
        let transport = ReqwestTransport::new()?;

        let session = if self.persist {
            let repository = match self.session_dir {
                Some(dir) => FileSessionRepository::new(dir),
                None => FileSessionRepository::in_data_dir(),
            };
            let store: Arc<dyn SessionStore> = Arc::new(repository);
            SessionHandle::with_store(None, store)
        } else {
            SessionHandle::new(None)
        };

        let prompt: Arc<dyn ReauthPrompt> = self.prompt.unwrap_or_else(|| Arc::new(NoopPrompt));
        let gateway = RequestGateway::new(self.config.build(), transport, session, prompt);

        Ok(Client {
            gateway: Arc::new(gateway),
            router: self.router,
        })
    }
}
