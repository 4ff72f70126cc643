pub mod tokens;
pub mod tweets;
pub mod users;
pub mod users_follow_list;
