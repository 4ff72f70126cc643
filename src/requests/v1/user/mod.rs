use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct SignUpRequest {
    #[schema(example = "송은우")]
    pub name: String,
    #[schema(example = "songew@gmail.com")]
    pub email: String,
    #[schema(example = "test password")]
    pub password: String,
    #[serde(default)]
    #[schema(example = "test test")]
    pub profile: String,
}
