//! Re-authentication prompt port

use std::future::Future;
use std::pin::Pin;

/// Capability invoked when authentication cannot be recovered.
///
/// Implementations ask the user whether to move to the login screen and,
/// if confirmed, perform the navigation, recording `from_path` so the
/// user can be returned there after logging in. The gateway only observes
/// the decision; the error that triggered the prompt propagates to the
/// caller either way.
pub trait ReauthPrompt: Send + Sync {
    /// Asks for confirmation and redirects on approval.
    ///
    /// Returns true if the user agreed and navigation happened.
    fn confirm_and_redirect<'a>(
        &'a self,
        from_path: &'a str,
    ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>>;
}
