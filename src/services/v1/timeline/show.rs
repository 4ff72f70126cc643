use crate::entities::v1::tweets::Model;
use crate::metrics::AppMetrics;
use crate::prelude::*;
use crate::responses::v1::timeline::Timeline;

/// Own tweets of `user_id` plus the tweets of everyone it follows.
///
/// Unknown users simply have an empty timeline.
#[::tracing::instrument(skip(db, metrics))]
pub async fn show(
    db: &DatabaseConnection,
    metrics: &AppMetrics,
    user_id: i32,
) -> Result<Timeline, Error> {
    let tweets = Model::timeline(db, user_id).await?;

    metrics.record_timeline_read(tweets.len());
    ::tracing::debug!(entries = tweets.len(), "Timeline fetched");

    Ok((user_id, tweets).into())
}
