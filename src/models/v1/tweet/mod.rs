use sea_orm::prelude::*;
use sea_orm::{Condition, NotSet, QueryOrder, QuerySelect, QueryTrait, Set};

use crate::entities::v1::tweets::{ActiveModel, Column, Entity, Model};
use crate::entities::v1::users_follow_list;
use crate::prelude::now;

impl Model {
    pub async fn store<T: ToString>(
        db: &DatabaseConnection,
        user_id: i32,
        tweet: T,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            tweet: Set(tweet.to_string()),
            created_at: Set(now()),
        }
        .insert(db)
        .await
    }

    /// Tweets written by `user_id` or by anyone `user_id` follows, oldest first.
    ///
    /// A single filter over `tweets` keeps each row at most once, even when a
    /// user follows themselves.
    pub async fn timeline(db: &DatabaseConnection, user_id: i32) -> Result<Vec<Self>, DbErr> {
        let followees = users_follow_list::Entity::find()
            .select_only()
            .column(users_follow_list::Column::FollowUserId)
            .filter(users_follow_list::Column::UserId.eq(user_id))
            .into_query();

        Entity::find()
            .filter(
                Condition::any()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::UserId.in_subquery(followees)),
            )
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}
