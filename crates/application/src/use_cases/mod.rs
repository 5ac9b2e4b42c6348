//! Session lifecycle use cases

mod login;
mod logout;
mod restore_session;

pub use login::{Login, LoginInput};
pub use logout::Logout;
pub use restore_session::RestoreSession;
