//! Lionboard Application - Authenticated request gateway
//!
//! This crate holds the gateway core: the ports implemented by
//! infrastructure adapters, the shared session state the gateway mutates,
//! and the request/response contracts that make bearer-token
//! authentication transparent to callers.

pub mod error;
pub mod gateway;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{GatewayError, GatewayResult, HttpFailure};
pub use gateway::{GatewayConfig, GatewayConfigBuilder, RequestGateway};
pub use session::SessionHandle;
