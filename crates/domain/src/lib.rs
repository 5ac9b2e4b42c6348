//! Lionboard Domain - Core client types
//!
//! This crate defines the domain model for the Lionboard API client.
//! All types here are pure Rust with no I/O dependencies.

pub mod board;
pub mod error;
pub mod request;
pub mod response;
pub mod session;

pub use board::{Author, ItemEnvelope, NewPost, Post, Reply};
pub use error::{DomainError, DomainResult};
pub use request::{AUTHORIZATION, Headers, HttpMethod, OutboundRequest, QueryParam, QueryParams};
pub use response::{ResponseSpec, StatusCode};
pub use session::Session;
