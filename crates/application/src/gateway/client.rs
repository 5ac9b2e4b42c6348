//! Request gateway core.
//!
//! The gateway applies two contracts around every outbound call:
//!
//! - before the transport: credential injection and default merging;
//! - after the transport: 401 detection, a single-flight token refresh,
//!   one replay of the failing request, and escalation to the
//!   re-authentication flow when recovery is impossible.
//!
//! The refresh call goes through the gateway's own pipeline, so a
//! rejected refresh token lands in the refresh-path handling and runs the
//! expired-session flow exactly once. The replay goes straight to the
//! transport: whatever it returns is final, and a second 401 never
//! triggers another refresh.

use std::sync::Arc;

use serde::Deserialize;

use lionboard_domain::{AUTHORIZATION, OutboundRequest, ResponseSpec, Session, StatusCode};

use crate::error::{GatewayError, GatewayResult, HttpFailure};
use crate::gateway::config::GatewayConfig;
use crate::ports::{ReauthPrompt, Transport};
use crate::session::SessionHandle;

/// Token refresh response body.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// HTTP client abstraction that transparently manages bearer-token
/// authentication for every outbound call.
///
/// Callers never handle the token lifecycle: the gateway reads the
/// injected [`SessionHandle`], refreshes the access token on expiry, and
/// invokes the injected [`ReauthPrompt`] when the session cannot be
/// recovered.
pub struct RequestGateway<T> {
    config: GatewayConfig,
    transport: T,
    session: SessionHandle,
    prompt: Arc<dyn ReauthPrompt>,
}

impl<T: Transport> RequestGateway<T> {
    /// Creates a gateway over `transport`.
    pub fn new(
        config: GatewayConfig,
        transport: T,
        session: SessionHandle,
        prompt: Arc<dyn ReauthPrompt>,
    ) -> Self {
        Self {
            config,
            transport,
            session,
            prompt,
        }
    }

    /// The gateway configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The session handle this gateway reads and mutates.
    #[must_use]
    pub const fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Sends a request, transparently recovering from an expired access
    /// token.
    ///
    /// # Errors
    ///
    /// Returns the transport error, the non-2xx response, or the failure
    /// of the single recovery attempt; see [`GatewayError`].
    pub async fn send(&self, request: OutboundRequest) -> GatewayResult<ResponseSpec> {
        let prepared = self.prepare(request).await;
        tracing::debug!(method = %prepared.method, path = %prepared.path, "dispatching request");
        let response = self
            .transport
            .execute(&self.config.base_address, &prepared, self.config.timeout_ms)
            .await?;
        self.handle_response(prepared, response).await
    }

    /// Applies the request-construction contract: access-token injection
    /// (except on the refresh path) and default header/parameter merging.
    async fn prepare(&self, mut request: OutboundRequest) -> OutboundRequest {
        if request.path != self.config.refresh_path
            && let Some(session) = self.session.get().await
        {
            request
                .headers
                .set(AUTHORIZATION, session.authorization_header());
        }
        request.params = request.params.merged_over(&self.config.default_params);
        request.headers.merge_defaults(&self.config.default_headers);
        request
    }

    /// Applies the response-handling contract.
    async fn handle_response(
        &self,
        request: OutboundRequest,
        response: ResponseSpec,
    ) -> GatewayResult<ResponseSpec> {
        if response.is_success() {
            return Ok(response);
        }

        let status = response.status;
        tracing::warn!(status = status.as_u16(), path = %request.path, "request failed");
        let failure = HttpFailure::from(response);

        if status != StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Http(failure));
        }

        if request.path == self.config.refresh_path {
            // The refresh token itself was rejected; the session cannot
            // be recovered. Destroy it and hand the user to the login
            // flow.
            self.session.clear().await;
            self.run_expired_flow(&request.path).await;
            return Err(GatewayError::SessionExpired(failure));
        }

        if self.session.is_authenticated().await {
            self.recover(request, failure).await
        } else {
            self.run_expired_flow(&request.path).await;
            Err(GatewayError::SessionExpired(failure))
        }
    }

    /// Runs the single refresh-and-replay recovery for a 401.
    async fn recover(
        &self,
        mut request: OutboundRequest,
        failure: HttpFailure,
    ) -> GatewayResult<ResponseSpec> {
        let stale = request.headers.get(AUTHORIZATION).map(str::to_owned);

        let _gate = self.session.refresh_gate().await;
        let Some(session) = self.session.get().await else {
            // Destroyed while waiting on the gate; nothing left to
            // refresh with.
            return Err(GatewayError::SessionExpired(failure));
        };

        let current = session.authorization_header();
        let authorization = if stale.as_deref() == Some(current.as_str()) {
            // Our token is still the one that was rejected: this task
            // performs the refresh.
            let token = self.refresh_with(&session).await?;
            format!("Bearer {token}")
        } else {
            // Another task refreshed while we waited on the gate; reuse
            // its token.
            current
        };

        request.headers.set(AUTHORIZATION, authorization);
        tracing::debug!(path = %request.path, "replaying request with refreshed token");

        // One replay, straight to the transport. Its outcome is the
        // caller's outcome; a second 401 never triggers another refresh.
        let response = self
            .transport
            .execute(&self.config.base_address, &request, self.config.timeout_ms)
            .await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(GatewayError::Http(HttpFailure::from(response)))
        }
    }

    /// Exchanges the refresh token for a new access token and rewrites
    /// the session's access token in place.
    async fn refresh_with(&self, session: &Session) -> GatewayResult<String> {
        tracing::debug!("access token rejected, exchanging the refresh token");
        let request = OutboundRequest::get(self.config.refresh_path.clone())
            .with_header(AUTHORIZATION, session.refresh_authorization_header());
        let response = Box::pin(self.send(request)).await?;
        let body: RefreshResponse = response
            .json()
            .map_err(|e| GatewayError::Decode(format!("refresh response: {e}")))?;
        if self.session.replace_access_token(&body.access_token).await {
            tracing::info!("access token refreshed");
        } else {
            tracing::debug!("session was destroyed during refresh");
        }
        Ok(body.access_token)
    }

    /// Asks the user to re-authenticate. The decision does not change
    /// what the caller sees.
    async fn run_expired_flow(&self, from_path: &str) {
        tracing::warn!(path = %from_path, "authentication cannot be recovered, prompting for login");
        let redirected = self.prompt.confirm_and_redirect(from_path).await;
        if !redirected {
            tracing::debug!("login redirect declined");
        }
    }
}
