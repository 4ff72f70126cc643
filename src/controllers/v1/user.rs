use actix_web::post;

use crate::metrics::AppMetrics;
use crate::prelude::*;
use crate::requests::v1::user::SignUpRequest;
use crate::responses::v1::user::User;
use crate::security::PasswordHasher;
use crate::services;

/// Register a new user
///
/// Fail if:
/// - name, email or password is missing
/// - email is malformed or already taken
/// - password is too short
#[utoipa::path(
    tag = "User",
    request_body = SignUpRequest,
    responses(
        User,
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/sign-up")]
pub async fn sign_up(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    metrics: Data<AppMetrics>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl Responder, Error> {
    services::v1::user::store::store(&db, &hasher, &metrics, request).await
}
