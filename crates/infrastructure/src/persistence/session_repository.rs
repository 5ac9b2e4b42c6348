//! File-backed session repository.
//!
//! The session survives restarts as `user.json` inside the store
//! directory. The file name is the fixed storage key; embedders pick the
//! directory (or take the platform data directory).

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use lionboard_application::ports::{SessionStore, SessionStoreError};
use lionboard_domain::Session;

/// Fixed storage key for the persisted session.
const SESSION_KEY: &str = "user";

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct FileSessionRepository {
    dir: PathBuf,
}

impl FileSessionRepository {
    /// Creates a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store rooted in the platform data directory.
    ///
    /// Falls back to the current directory when the platform reports
    /// none.
    #[must_use]
    pub fn in_data_dir() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lionboard");
        Self { dir }
    }

    /// Returns the path of the serialized session.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.dir.join(format!("{SESSION_KEY}.json"))
    }
}

#[async_trait]
impl SessionStore for FileSessionRepository {
    async fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let path = self.session_path();
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::Io(e)),
        };

        let session = serde_json::from_slice(&bytes)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;
        tracing::debug!(path = %path.display(), "session loaded");
        Ok(Some(session))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec_pretty(session)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;
        fs::write(self.session_path(), bytes).await?;
        tracing::debug!(path = %self.session_path().display(), "session persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.session_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(4, "yong", "A1", "R1")
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path());
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path());

        let original = session();
        repo.save(&original).await.unwrap();
        let loaded = repo.load().await.unwrap().unwrap();

        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path().join("nested").join("store"));

        repo.save(&session()).await.unwrap();
        assert!(repo.session_path().exists());
    }

    #[tokio::test]
    async fn test_clear_removes_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path());

        repo.save(&session()).await.unwrap();
        repo.clear().await.unwrap();
        assert!(!repo.session_path().exists());

        // Clearing again is not an error.
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::new(dir.path());

        tokio::fs::create_dir_all(dir.path()).await.unwrap();
        tokio::fs::write(repo.session_path(), b"not json")
            .await
            .unwrap();

        let error = repo.load().await.unwrap_err();
        assert!(matches!(error, SessionStoreError::Serialization(_)));
    }

    #[test]
    fn test_session_path_uses_fixed_key() {
        let repo = FileSessionRepository::new("/tmp/store");
        assert!(repo.session_path().ends_with("user.json"));
    }
}
