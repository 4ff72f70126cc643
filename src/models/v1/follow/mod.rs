use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{PaginatorTrait, Set};

use crate::entities::v1::users_follow_list::{ActiveModel, Column, Entity, Model};
use crate::prelude::now;

impl Model {
    /// Create the edge `user_id -> follow_user_id`.
    ///
    /// Returns `false` when the edge already existed.
    pub async fn follow(
        db: &DatabaseConnection,
        user_id: i32,
        follow_user_id: i32,
    ) -> Result<bool, DbErr> {
        let edge = ActiveModel {
            user_id: Set(user_id),
            follow_user_id: Set(follow_user_id),
            created_at: Set(now()),
        };

        let inserted = Entity::insert(edge)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::FollowUserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(inserted > 0)
    }

    /// Remove the edge `user_id -> follow_user_id`.
    ///
    /// Returns `false` when there was nothing to remove.
    pub async fn unfollow(
        db: &DatabaseConnection,
        user_id: i32,
        follow_user_id: i32,
    ) -> Result<bool, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::FollowUserId.eq(follow_user_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_following(
        db: &DatabaseConnection,
        user_id: i32,
        follow_user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::FollowUserId.eq(follow_user_id))
            .count(db)
            .await?;

        Ok(count > 0)
    }
}
