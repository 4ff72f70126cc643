use crate::entities::v1::users_follow_list::Model;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Auth;
use crate::prelude::*;
use crate::requests::v1::follow::UnfollowRequest;

#[::tracing::instrument(skip(db, metrics), fields(user_id = auth.user_id, follow_user_id = request.unfollow))]
pub async fn unfollow(
    db: &DatabaseConnection,
    metrics: &AppMetrics,
    auth: Auth,
    request: UnfollowRequest,
) -> Result<Success, Error> {
    if Model::unfollow(db, auth.user_id, request.unfollow).await? {
        metrics.record_follow_change("unfollow");
        ::tracing::info!("Follow edge removed");
    } else {
        ::tracing::debug!("Nothing to unfollow");
    }

    Ok(Success)
}
