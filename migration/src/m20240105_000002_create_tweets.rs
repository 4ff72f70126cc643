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
                    .table(Tweet::Table)
                    .col(
                        ColumnDef::new(Tweet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tweet::UserId).integer().not_null())
                    .col(ColumnDef::new(Tweet::Tweet).text().not_null())
                    .col(
                        ColumnDef::new(Tweet::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tweet::Table, Tweet::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Tweet::Table)
                    .col(Tweet::UserId)
                    .name("idx_tweets_user_id")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Tweet::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
enum Tweet {
    #[sea_orm(iden = "tweets")]
    Table,
    Id,
    UserId,
    Tweet,
    CreatedAt,
}
