use sea_orm_migration::prelude::*;

use crate::m20240105_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(FollowList::Table)
                    .col(ColumnDef::new(FollowList::UserId).integer().not_null())
                    .col(ColumnDef::new(FollowList::FollowUserId).integer().not_null())
                    .col(
                        ColumnDef::new(FollowList::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(FollowList::UserId)
                            .col(FollowList::FollowUserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FollowList::Table, FollowList::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FollowList::Table, FollowList::FollowUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(FollowList::Table)
                    .col(FollowList::FollowUserId)
                    .name("idx_users_follow_list_follow_user_id")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(FollowList::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
enum FollowList {
    #[sea_orm(iden = "users_follow_list")]
    Table,
    UserId,
    FollowUserId,
    CreatedAt,
}
