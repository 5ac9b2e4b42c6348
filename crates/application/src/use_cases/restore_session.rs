//! Session restore use case.

use lionboard_domain::Session;

use crate::ports::SessionStoreError;
use crate::session::SessionHandle;

/// Use case: load the persisted session at startup.
pub struct RestoreSession<'a> {
    session: &'a SessionHandle,
}

impl<'a> RestoreSession<'a> {
    /// Creates the use case over `session`.
    #[must_use]
    pub const fn new(session: &'a SessionHandle) -> Self {
        Self { session }
    }

    /// Reads the persisted session into the handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or decoded.
    pub async fn execute(&self) -> Result<Option<Session>, SessionStoreError> {
        let restored = self.session.restore().await?;
        if let Some(session) = &restored {
            tracing::debug!(user = %session.display_name, "session restored");
        }
        Ok(restored)
    }
}
