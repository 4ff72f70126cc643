#[allow(clippy::module_inception)]
pub mod auth;
pub mod authenticated;

pub use auth::Auth;
pub use authenticated::{Authenticated, Session};
