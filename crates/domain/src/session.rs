//! Authenticated session state.
//!
//! A [`Session`] holds the logged-in user's identity and credential pair.
//! It is created on successful login, replaced wholesale when restored
//! from storage, and destroyed on logout or when the refresh token is
//! rejected. Only the access token is rewritten in place after a refresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's credential and identity state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server-side user id.
    pub user_id: i64,
    /// Display name shown to the user.
    pub display_name: String,
    /// Profile image path, if the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Short-lived credential authorizing API calls.
    pub access_token: String,
    /// Longer-lived credential used solely to obtain a new access token.
    pub refresh_token: String,
    /// When this session was established.
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session established now.
    #[must_use]
    pub fn new(
        user_id: i64,
        display_name: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            profile_image: None,
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            logged_in_at: Utc::now(),
        }
    }

    /// Adds a profile image path.
    #[must_use]
    pub fn with_profile_image(mut self, path: impl Into<String>) -> Self {
        self.profile_image = Some(path.into());
        self
    }

    /// Returns the `Authorization` header value for API calls.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Returns the `Authorization` header value for the token refresh call.
    #[must_use]
    pub fn refresh_authorization_header(&self) -> String {
        format!("Bearer {}", self.refresh_token)
    }

    /// Replaces the access token, leaving everything else untouched.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
    }
}
