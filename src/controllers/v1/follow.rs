use actix_web::post;

use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Auth;
use crate::prelude::*;
use crate::requests::v1::follow::{FollowRequest, UnfollowRequest};
use crate::services;

/// Follow another user
///
/// Fail if:
/// - the user to follow does not exist
#[utoipa::path(
    tag = "Follow",
    security(("token" = [])),
    request_body = FollowRequest,
    responses(
        (status = 200, description = "Following"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/follow")]
pub async fn follow(
    auth: Auth,
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    Json(request): Json<FollowRequest>,
) -> Result<impl Responder, Error> {
    services::v1::follow::follow::follow(&db, &metrics, auth, request).await
}

/// Stop following a user
#[utoipa::path(
    tag = "Follow",
    security(("token" = [])),
    request_body = UnfollowRequest,
    responses(
        (status = 200, description = "Not following"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/unfollow")]
pub async fn unfollow(
    auth: Auth,
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    Json(request): Json<UnfollowRequest>,
) -> Result<impl Responder, Error> {
    services::v1::follow::unfollow::unfollow(&db, &metrics, auth, request).await
}
