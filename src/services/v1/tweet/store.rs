use crate::config::TweetConfig;
use crate::entities::v1::tweets::Model;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::Auth;
use crate::prelude::*;
use crate::requests::v1::tweet::TweetRequest;

#[::tracing::instrument(skip(db, config, metrics, request), fields(user_id = auth.user_id))]
pub async fn store(
    db: &DatabaseConnection,
    config: &TweetConfig,
    metrics: &AppMetrics,
    auth: Auth,
    request: TweetRequest,
) -> Result<Success, Error> {
    let mut validation = Validation::new();
    let tweet = request.tweet.trim();
    let length = tweet.chars().count();

    if length == 0 {
        validation.add("tweet", "Tweet field is required");
    } else if length > config.max_length {
        validation.add(
            "tweet",
            format!("Tweet must be at most {} characters", config.max_length),
        );
    }

    if !validation.is_empty() {
        return Err(validation.into());
    }

    let tweet = Model::store(db, auth.user_id, tweet).await?;

    metrics.record_tweet();
    ::tracing::info!(tweet_id = tweet.id, "Tweet stored");

    Ok(Success)
}
