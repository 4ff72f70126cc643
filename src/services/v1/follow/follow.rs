use crate::entities::v1::{users, users_follow_list::Model};
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Auth;
use crate::prelude::*;
use crate::requests::v1::follow::FollowRequest;

/// Subscribe the caller to `request.follow`.
///
/// Following someone already followed succeeds without creating a second edge.
#[::tracing::instrument(skip(db, metrics), fields(user_id = auth.user_id, follow_user_id = request.follow))]
pub async fn follow(
    db: &DatabaseConnection,
    metrics: &AppMetrics,
    auth: Auth,
    request: FollowRequest,
) -> Result<Success, Error> {
    if !users::Model::exists(db, request.follow).await? {
        return Err(Error::not_found(format!(
            "User {} not found",
            request.follow
        )));
    }

    if Model::follow(db, auth.user_id, request.follow).await? {
        metrics.record_follow_change("follow");
        ::tracing::info!("Follow edge created");
    } else {
        ::tracing::debug!("Already following");
    }

    Ok(Success)
}
