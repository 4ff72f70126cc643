use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::entities::v1::tweets;
use crate::prelude::*;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct TimelineTweet {
    #[schema(example = 2)]
    pub user_id: i32,
    #[schema(example = "i am id 2")]
    pub tweet: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq, Hash)]
#[response(status = 200, description = "OK")]
pub struct Timeline {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema()]
    pub timeline: Vec<TimelineTweet>,
}

impl From<tweets::Model> for TimelineTweet {
    fn from(tweet: tweets::Model) -> Self {
        Self {
            user_id: tweet.user_id,
            tweet: tweet.tweet,
        }
    }
}

impl From<(i32, Vec<tweets::Model>)> for Timeline {
    fn from((user_id, tweets): (i32, Vec<tweets::Model>)) -> Self {
        Self {
            user_id,
            timeline: tweets.into_iter().map(TimelineTweet::from).collect(),
        }
    }
}

impl Responder for Timeline {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
