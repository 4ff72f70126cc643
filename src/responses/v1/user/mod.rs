use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::entities::v1::users;
use crate::prelude::*;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq, Hash)]
#[response(status = 200, description = "OK")]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "송은우")]
    pub name: String,
    #[schema(example = "songew@gmail.com")]
    pub email: String,
    #[schema(example = "test test")]
    pub profile: String,
}

impl From<users::Model> for User {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            profile: user.profile,
        }
    }
}

impl Responder for User {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
