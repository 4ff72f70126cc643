use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(lighter_timeline_migration::Migrator).await;
}
