use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::entities::v1::tokens;
use crate::prelude::*;
use crate::security::encode_token;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, IntoResponses, PartialEq, Eq, Hash)]
#[response(status = 200, description = "Authenticated")]
pub struct AccessToken {
    /// Opaque token to send back in the `Authorization` header
    #[schema(example = "JxF12TrwUP45BMd")]
    pub access_token: String,
}

impl From<tokens::Model> for AccessToken {
    fn from(token: tokens::Model) -> Self {
        Self {
            access_token: encode_token(token.id),
        }
    }
}

impl Responder for AccessToken {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
