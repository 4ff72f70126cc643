use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct FollowRequest {
    /// Id of the user to follow
    #[schema(example = 2)]
    pub follow: i32,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct UnfollowRequest {
    /// Id of the user to stop following
    #[schema(example = 2)]
    pub unfollow: i32,
}
