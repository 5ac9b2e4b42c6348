//! Re-authentication prompt adapters.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use lionboard_application::ports::ReauthPrompt;

use super::router::{MemoryRouter, RouteState};

/// Default login route.
pub const LOGIN_ROUTE: &str = "/users/login";

/// Prompt that runs a confirm callback and, on approval, navigates to
/// the login route recording where the user came from.
///
/// The callback receives the path to return to after login; embedders
/// typically show a confirmation dialog there.
pub struct LoginRedirect<C> {
    router: Arc<MemoryRouter>,
    confirm: C,
    login_route: String,
}

impl<C> LoginRedirect<C>
where
    C: Fn(&str) -> bool + Send + Sync,
{
    /// Creates a prompt over `router` with the given confirm callback.
    pub fn new(router: Arc<MemoryRouter>, confirm: C) -> Self {
        Self {
            router,
            confirm,
            login_route: LOGIN_ROUTE.to_string(),
        }
    }

    /// Overrides the login route.
    #[must_use]
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }
}

impl<C> ReauthPrompt for LoginRedirect<C>
where
    C: Fn(&str) -> bool + Send + Sync,
{
    fn confirm_and_redirect<'a>(
        &'a self,
        from_path: &'a str,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async move {
            if !(self.confirm)(from_path) {
                return false;
            }
            self.router
                .navigate(
                    self.login_route.clone(),
                    Some(RouteState {
                        from: from_path.to_string(),
                    }),
                )
                .await;
            true
        })
    }
}

/// Prompt that never redirects; for headless embedders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrompt;

impl ReauthPrompt for NoopPrompt {
    fn confirm_and_redirect<'a>(
        &'a self,
        _from_path: &'a str,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
        Box::pin(async { false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_confirmed_prompt_navigates_with_from_state() {
        let router = Arc::new(MemoryRouter::new());
        let prompt = LoginRedirect::new(router.clone(), |_from: &str| true);

        let redirected = prompt.confirm_and_redirect("/free/1").await;
        assert!(redirected);

        let current = router.current().await;
        assert_eq!(current.path, LOGIN_ROUTE);
        assert_eq!(current.state.map(|s| s.from).as_deref(), Some("/free/1"));
    }

    #[tokio::test]
    async fn test_declined_prompt_stays_put() {
        let router = Arc::new(MemoryRouter::new());
        let prompt = LoginRedirect::new(router.clone(), |_from: &str| false);

        let redirected = prompt.confirm_and_redirect("/free/1").await;
        assert!(!redirected);
        assert_eq!(router.current().await.path, "/");
    }

    #[tokio::test]
    async fn test_custom_login_route() {
        let router = Arc::new(MemoryRouter::new());
        let prompt =
            LoginRedirect::new(router.clone(), |_from: &str| true).with_login_route("/signin");

        prompt.confirm_and_redirect("/qna/7").await;
        assert_eq!(router.current().await.path, "/signin");
    }
}
