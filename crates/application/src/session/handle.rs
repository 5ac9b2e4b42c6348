//! Session handle with write-through persistence.
//!
//! The handle is the only shared mutable resource in the gateway. It is
//! created by the composition root, handed to the gateway explicitly, and
//! written through to a [`SessionStore`] on every mutation so the session
//! survives restarts.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use lionboard_domain::Session;

use crate::ports::{SessionStore, SessionStoreError};

/// Thread-safe handle to the current session.
///
/// Cloning is cheap; clones share the same state. A persistence failure
/// during write-through is logged and does not fail the request flow that
/// triggered the mutation.
#[derive(Clone)]
pub struct SessionHandle {
    current: Arc<RwLock<Option<Session>>>,
    store: Option<Arc<dyn SessionStore>>,
    refresh_gate: Arc<Mutex<()>>,
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("persisted", &self.store.is_some())
            .finish_non_exhaustive()
    }
}

impl SessionHandle {
    /// Creates an in-memory handle with no persistence.
    #[must_use]
    pub fn new(initial: Option<Session>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
            store: None,
            refresh_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Creates a handle that writes through to `store` on every mutation.
    #[must_use]
    pub fn with_store(initial: Option<Session>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
            store: Some(store),
            refresh_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Loads the persisted session into the handle.
    ///
    /// Called once at startup; a handle without a store loads nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or decoded.
    pub async fn restore(&self) -> Result<Option<Session>, SessionStoreError> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        let loaded = store.load().await?;
        *self.current.write().await = loaded.clone();
        Ok(loaded)
    }

    /// Returns a snapshot of the current session.
    pub async fn get(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Returns true if a session exists.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Replaces the session wholesale (login).
    pub async fn replace(&self, session: Session) {
        *self.current.write().await = Some(session.clone());
        self.persist_save(&session).await;
    }

    /// Destroys the session (logout, unrecoverable refresh failure).
    pub async fn clear(&self) {
        *self.current.write().await = None;
        self.persist_clear().await;
    }

    /// Rewrites only the access token after a successful refresh.
    ///
    /// Returns false if the session was destroyed in the meantime.
    pub async fn replace_access_token(&self, token: &str) -> bool {
        let snapshot = {
            let mut guard = self.current.write().await;
            let Some(session) = guard.as_mut() else {
                return false;
            };
            session.set_access_token(token);
            session.clone()
        };
        self.persist_save(&snapshot).await;
        true
    }

    /// Serializes token refreshes.
    ///
    /// Hold the returned guard for the duration of a refresh so that
    /// concurrent recoveries share one attempt instead of each issuing
    /// their own refresh call.
    pub async fn refresh_gate(&self) -> MutexGuard<'_, ()> {
        self.refresh_gate.lock().await
    }

    async fn persist_save(&self, session: &Session) {
        if let Some(store) = &self.store
            && let Err(error) = store.save(session).await
        {
            tracing::warn!(%error, "failed to persist session");
        }
    }

    async fn persist_clear(&self) {
        if let Some(store) = &self.store
            && let Err(error) = store.clear().await
        {
            tracing::warn!(%error, "failed to clear persisted session");
        }
    }
}
