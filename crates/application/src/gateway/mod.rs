//! Authenticated request gateway
//!
//! Wraps a [`crate::ports::Transport`] and transparently manages
//! bearer-token authentication for every outbound call.

mod client;
mod config;

pub use client::RequestGateway;
pub use config::{DEFAULT_REFRESH_PATH, DEFAULT_TIMEOUT_MS, GatewayConfig, GatewayConfigBuilder};
