//! In-memory route state.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// State carried along a navigation, recording where the user came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteState {
    /// Path to return to once the destination flow completes.
    pub from: String,
}

/// A visited location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    /// Route path.
    pub path: String,
    /// Optional state attached by the navigation.
    pub state: Option<RouteState>,
}

/// Named-route navigation boundary held in memory.
///
/// Embedders bridge this to their real navigation surface; tests read it
/// directly.
#[derive(Debug)]
pub struct MemoryRouter {
    current: RwLock<RouteLocation>,
    history: RwLock<Vec<RouteLocation>>,
}

impl MemoryRouter {
    /// Creates a router starting at the root path.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// Creates a router starting at `path`.
    #[must_use]
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(RouteLocation {
                path: path.into(),
                state: None,
            }),
            history: RwLock::new(Vec::new()),
        }
    }

    /// Moves to a named route, optionally carrying state.
    pub async fn navigate(&self, path: impl Into<String>, state: Option<RouteState>) {
        let next = RouteLocation {
            path: path.into(),
            state,
        };
        let mut current = self.current.write().await;
        self.history.write().await.push(current.clone());
        tracing::debug!(to = %next.path, "navigating");
        *current = next;
    }

    /// Returns the current location.
    pub async fn current(&self) -> RouteLocation {
        self.current.read().await.clone()
    }

    /// Returns the locations visited before the current one.
    pub async fn history(&self) -> Vec<RouteLocation> {
        self.history.read().await.clone()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_navigate_records_history() {
        let router = MemoryRouter::starting_at("/free/1");

        router
            .navigate(
                "/users/login",
                Some(RouteState {
                    from: "/free/1".to_string(),
                }),
            )
            .await;

        let current = router.current().await;
        assert_eq!(current.path, "/users/login");
        assert_eq!(current.state.map(|s| s.from).as_deref(), Some("/free/1"));

        let history = router.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].path, "/free/1");
    }
}
