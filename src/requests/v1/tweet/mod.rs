use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct TweetRequest {
    #[schema(example = "Hi world")]
    pub tweet: String,
}
