use std::time::Duration;

use sea_orm::prelude::*;
use sea_orm::{NotSet, PaginatorTrait, Set};

use crate::entities::v1::tokens;
use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};
use crate::prelude::now;

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_email<T: ToString>(
        db: &DatabaseConnection,
        email: T,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .one(db)
            .await
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let count = Entity::find().filter(Column::Id.eq(id)).count(db).await?;

        Ok(count > 0)
    }

    pub async fn email_exists<T: ToString>(db: &DatabaseConnection, email: T) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    /// Insert a new user, letting the database assign the id.
    pub async fn create<Name, Email, Profile>(
        db: &DatabaseConnection,
        name: Name,
        email: Email,
        profile: Profile,
        hashed_password: String,
    ) -> Result<Self, DbErr>
    where
        Name: ToString,
        Email: ToString,
        Profile: ToString,
    {
        ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            profile: Set(profile.to_string()),
            hashed_password: Set(hashed_password),
            created_at: Set(now()),
        }
        .insert(db)
        .await
    }

    /// Persist a new session token for this user.
    pub async fn generate_token(
        &self,
        db: &DatabaseConnection,
        lifetime: Option<Duration>,
    ) -> Result<tokens::Model, DbErr> {
        let expired_at = match lifetime {
            Some(lifetime) => {
                let lifetime = chrono::Duration::from_std(lifetime)
                    .map_err(|e| DbErr::Custom(format!("Invalid token lifetime: {}", e)))?;

                let expired_at = now()
                    .checked_add_signed(lifetime)
                    .ok_or_else(|| DbErr::Custom("Token lifetime overflows".to_string()))?;

                Some(expired_at)
            }
            None => None,
        };

        let token = tokens::Model {
            id: Uuid::new_v4(),
            user_id: self.id,
            expired_at,
        };

        token.store(db).await
    }
}
