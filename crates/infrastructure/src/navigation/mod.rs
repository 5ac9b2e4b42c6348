//! Navigation boundary
//!
//! The client has no UI of its own; navigation is a capability the
//! embedder observes. [`MemoryRouter`] holds the current named route, and
//! [`LoginRedirect`] implements the re-authentication prompt over it.

mod reauth;
mod router;

pub use reauth::{LOGIN_ROUTE, LoginRedirect, NoopPrompt};
pub use router::{MemoryRouter, RouteLocation, RouteState};
