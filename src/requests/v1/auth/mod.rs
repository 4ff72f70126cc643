use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq, Hash)]
pub struct LoginRequest {
    #[schema(example = "songew@gmail.com")]
    pub email: String,
    #[schema(example = "test password")]
    pub password: String,
}
