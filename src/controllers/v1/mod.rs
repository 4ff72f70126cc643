pub mod auth;
pub mod follow;
pub mod timeline;
pub mod tweet;
pub mod user;
