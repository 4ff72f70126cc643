//! Database connection helpers.
//!
//! The connection is created once at startup and handed to every handler
//! through `Data<DatabaseConnection>`; nothing in the crate holds a global
//! handle.

use std::time::Duration;

use lighter_timeline_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Open a connection pool as described by `config`.
///
/// Pending migrations are applied only when `database.migrate_on_start` is set;
/// otherwise the schema is expected to be managed by the migration binary.
#[::tracing::instrument(skip(config))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;

    ::tracing::info!("Database connected");

    if config.migrate_on_start {
        migrate(&db).await?;
    }

    Ok(db)
}

/// Apply every pending migration.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;

    ::tracing::info!("Database migrations applied");

    Ok(())
}

/// In-memory SQLite database with an empty schema.
pub async fn memory() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options).await
}
