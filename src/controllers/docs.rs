use utoipa::OpenApi;

use crate::api::Definition;
use crate::prelude::*;

/// OpenAPI document of every route
pub async fn openapi() -> impl Responder {
    Json(Definition::openapi())
}
