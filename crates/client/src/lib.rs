//! Lionboard API client
//!
//! Batteries-included client for the board API: an authenticated request
//! gateway (bearer-token injection, single-flight token refresh, one
//! replay of the failing request), a persisted session, and typed board
//! helpers.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use lionboard::Client;
//!
//! let client = Client::builder("https://11.fesp.shop")?
//!     .client_id("00-board")
//!     .build()?;
//!
//! client.restore_session().await?;
//! let post = client.fetch_post(1).await?;
//! println!("{}", post.title);
//! # Ok(())
//! # }
//! ```

mod board;
mod client;

pub use client::{Client, ClientBuilder};

pub use lionboard_application::ports::{
    ReauthPrompt, SessionStore, SessionStoreError, Transport, TransportError,
};
pub use lionboard_application::use_cases::{Login, LoginInput, Logout, RestoreSession};
pub use lionboard_application::{
    GatewayConfig, GatewayConfigBuilder, GatewayError, GatewayResult, HttpFailure, RequestGateway,
    SessionHandle,
};
pub use lionboard_domain::{
    AUTHORIZATION, Author, Headers, HttpMethod, ItemEnvelope, NewPost, OutboundRequest, Post,
    QueryParam, QueryParams, Reply, ResponseSpec, Session, StatusCode,
};
pub use lionboard_infrastructure::{
    FileSessionRepository, LOGIN_ROUTE, LoginRedirect, MemoryRouter, NoopPrompt, ReqwestTransport,
    RouteLocation, RouteState,
};
