//! Logout use case.

use crate::session::SessionHandle;

/// Use case: destroy the session and its persisted copy.
pub struct Logout<'a> {
    session: &'a SessionHandle,
}

impl<'a> Logout<'a> {
    /// Creates the use case over `session`.
    #[must_use]
    pub const fn new(session: &'a SessionHandle) -> Self {
        Self { session }
    }

    /// Destroys the session.
    pub async fn execute(&self) {
        self.session.clear().await;
        tracing::info!("logged out");
    }
}
