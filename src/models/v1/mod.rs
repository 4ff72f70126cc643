//! Query helpers attached to the entity models.

pub mod follow;
pub mod token;
pub mod tweet;
pub mod user;
