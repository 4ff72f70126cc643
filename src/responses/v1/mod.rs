pub mod auth;
pub mod timeline;
pub mod user;
