use actix_web::post;

use crate::config::AppConfig;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Auth;
use crate::prelude::*;
use crate::requests::v1::tweet::TweetRequest;
use crate::services;

/// Post a tweet as the authenticated user
#[utoipa::path(
    tag = "Tweet",
    security(("token" = [])),
    request_body = TweetRequest,
    responses(
        (status = 200, description = "Tweet stored"),
        (status = 401, description = "Missing or invalid access token"),
        (status = 422, description = "Tweet is empty or too long"),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/tweet")]
pub async fn store(
    auth: Auth,
    db: Data<DatabaseConnection>,
    config: Data<AppConfig>,
    metrics: Data<AppMetrics>,
    Json(request): Json<TweetRequest>,
) -> Result<impl Responder, Error> {
    services::v1::tweet::store::store(&db, &config.tweet, &metrics, auth, request).await
}
