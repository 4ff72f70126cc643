use actix_web::post;

use crate::config::AppConfig;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Auth, Authenticated as Cache};
use crate::prelude::*;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::AccessToken;
use crate::security::PasswordHasher;
use crate::services;

/// Create a new session
///
/// Fail if:
/// - email or password is empty
/// - email not found
/// - password is incorrect
#[utoipa::path(
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        AccessToken,
        (status = 401, description = "Invalid email or password"),
        (status = 422, description = "Validation failed"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    cached: Data<Cache>,
    hasher: Data<PasswordHasher>,
    config: Data<AppConfig>,
    metrics: Data<AppMetrics>,
    Json(request): Json<LoginRequest>,
) -> Result<impl Responder, Error> {
    services::v1::auth::login::login(&db, &cached, &hasher, &config.auth, &metrics, request).await
}

/// Destroy current session
///
/// Fail if:
/// - token not found
/// - token is expired
#[utoipa::path(
    tag = "Auth",
    security(("token" = [])),
    responses(
        (status = 200, description = "Session revoked"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/logout")]
pub async fn logout(
    auth: Auth,
    db: Data<DatabaseConnection>,
    cached: Data<Cache>,
) -> Result<impl Responder, Error> {
    services::v1::auth::logout::logout(auth, &db, &cached).await
}
