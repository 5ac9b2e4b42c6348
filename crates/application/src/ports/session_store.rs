//! Persisted session port

use async_trait::async_trait;
use thiserror::Error;

use lionboard_domain::Session;

/// Errors from the persisted session boundary.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Underlying storage I/O failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored session could not be encoded or decoded.
    #[error("session serialization error: {0}")]
    Serialization(String),
}

/// Port for the key-value store holding the serialized session.
///
/// The store survives process restarts: it is read once at startup,
/// written on every session mutation, and cleared on logout or expiry.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the stored value
    /// cannot be decoded.
    async fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Persists the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be encoded or written.
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Removes the persisted session. Removing an absent session is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
