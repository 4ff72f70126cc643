use actix_web::get;

use crate::metrics::AppMetrics;
use crate::prelude::*;
use crate::responses::v1::timeline::Timeline;
use crate::services;

/// Timeline of a user: its own tweets and those of everyone it follows
#[utoipa::path(
    tag = "Timeline",
    params(
        ("user_id" = i32, Path, description = "Owner of the timeline"),
    ),
    responses(
        Timeline,
        (status = 500, description = "Internal server error"),
    )
)]
#[get("/timeline/{user_id}")]
pub async fn show(
    db: Data<DatabaseConnection>,
    metrics: Data<AppMetrics>,
    user_id: Path<i32>,
) -> Result<impl Responder, Error> {
    services::v1::timeline::show::show(&db, &metrics, user_id.into_inner()).await
}
