pub mod follow;
pub mod unfollow;
