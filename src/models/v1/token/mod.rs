use sea_orm::prelude::*;
use sea_orm::Set;

use crate::entities::v1::tokens::{ActiveModel, Column, Entity, Model};
use crate::prelude::now;

impl Model {
    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        ActiveModel {
            id: Set(self.id),
            user_id: Set(self.user_id),
            expired_at: Set(self.expired_at),
        }
        .insert(db)
        .await
    }

    pub async fn revoke(db: &DatabaseConnection, id: Uuid) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;

        Ok(())
    }

    /// Drop every token whose expiry has passed, returning how many were removed.
    pub async fn prune_expired(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::ExpiredAt.lte(now()))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
