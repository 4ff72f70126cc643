pub use sea_orm_migration::prelude::*;

mod m20240105_000001_create_users;
mod m20240105_000002_create_tweets;
mod m20240105_000003_create_users_follow_list;
mod m20240105_000004_create_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240105_000001_create_users::Migration),
            Box::new(m20240105_000002_create_tweets::Migration),
            Box::new(m20240105_000003_create_users_follow_list::Migration),
            Box::new(m20240105_000004_create_tokens::Migration),
        ]
    }
}
