//! Lionboard Infrastructure - Adapters
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: a reqwest transport, a file-backed session
//! store, and the navigation boundary.

pub mod adapters;
pub mod navigation;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use navigation::{LOGIN_ROUTE, LoginRedirect, MemoryRouter, NoopPrompt, RouteLocation, RouteState};
pub use persistence::FileSessionRepository;
