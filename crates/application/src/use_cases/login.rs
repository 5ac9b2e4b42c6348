//! Login use case.

use serde::{Deserialize, Serialize};

use lionboard_domain::{OutboundRequest, Session};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::RequestGateway;
use crate::ports::Transport;

/// Path of the login endpoint.
const LOGIN_PATH: &str = "/users/login";

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginInput {
    /// Creates login credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response payload, as returned by `POST /users/login`.
#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    item: LoginItem,
}

#[derive(Debug, Deserialize)]
struct LoginItem {
    #[serde(rename = "_id")]
    id: i64,
    name: String,
    #[serde(default)]
    image: Option<LoginImage>,
    token: LoginToken,
}

#[derive(Debug, Deserialize)]
struct LoginImage {
    path: String,
}

#[derive(Debug, Deserialize)]
struct LoginToken {
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

/// Use case: authenticate and establish the session.
pub struct Login<'a, T> {
    gateway: &'a RequestGateway<T>,
}

impl<'a, T: Transport> Login<'a, T> {
    /// Creates the use case over `gateway`.
    #[must_use]
    pub const fn new(gateway: &'a RequestGateway<T>) -> Self {
        Self { gateway }
    }

    /// Submits credentials and stores the resulting session, replacing
    /// any previous one wholesale.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors; `Decode` if the response shape is
    /// unexpected.
    pub async fn execute(&self, input: LoginInput) -> GatewayResult<Session> {
        let body =
            serde_json::to_value(&input).map_err(|e| GatewayError::Decode(e.to_string()))?;
        let response = self
            .gateway
            .send(OutboundRequest::post(LOGIN_PATH, body))
            .await?;
        let envelope: LoginEnvelope = response
            .json()
            .map_err(|e| GatewayError::Decode(format!("login response: {e}")))?;

        let item = envelope.item;
        let mut session = Session::new(
            item.id,
            item.name,
            item.token.access_token,
            item.token.refresh_token,
        );
        if let Some(image) = item.image {
            session = session.with_profile_image(image.path);
        }

        self.gateway.session().replace(session.clone()).await;
        tracing::info!(user = %session.display_name, "logged in");
        Ok(session)
    }
}
