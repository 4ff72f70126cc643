use sea_orm::{ActiveModelTrait, DbErr, NotSet, Set};

use crate::config::auth::Argon2Config;
use crate::config::AppConfig;
use crate::database;
use crate::entities::v1::{tweets, users};
use crate::prelude::*;
use crate::security::password::PasswordHasher;

/// Password shared by every seeded user
pub const PASSWORD: &str = "test password";

/// Returns an in-memory SQLite database with all migrations applied
///
/// Every call yields a fresh, isolated database.
///
/// # Panics
/// Panics if the connection or a migration fails; tests should fail fast
/// when their setup is broken.
pub async fn database() -> DatabaseConnection {
    let db = database::memory()
        .await
        .expect("Failed to connect to in-memory database");

    database::migrate(&db)
        .await
        .expect("Failed to run migrations");

    db
}

/// Argon2 parameters cheap enough for tests
pub fn argon2() -> Argon2Config {
    Argon2Config {
        memory_cost: 19456,
        time_cost: 1,
        parallelism: 1,
        hash_length: 32,
    }
}

/// Returns a PasswordHasher configured with fast parameters for testing
pub fn password_hasher() -> Result<PasswordHasher, argon2::password_hash::Error> {
    PasswordHasher::from_config(&argon2())
}

/// Default configuration with the fast Argon2 parameters
pub fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.argon2 = argon2();
    config
}

/// Insert the two fixture users and the tweet of user 2.
///
/// | id | name   | email            | profile             |
/// |----|--------|------------------|---------------------|
/// | 1  | 송은우 | songew@gmail.com | test test           |
/// | 2  | 송하윤 | tet@gmail.com    | test test profile 2 |
///
/// Both use [`PASSWORD`]. User 2 has tweeted "i am id 2".
pub async fn seed(db: &DatabaseConnection, hasher: &PasswordHasher) -> Result<(), DbErr> {
    let hashed_password = hasher
        .hash(PASSWORD)
        .map_err(|e| DbErr::Custom(format!("Failed to hash fixture password: {}", e)))?;

    for (id, name, email, profile) in [
        (1, "송은우", "songew@gmail.com", "test test"),
        (2, "송하윤", "tet@gmail.com", "test test profile 2"),
    ] {
        users::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            profile: Set(profile.to_string()),
            hashed_password: Set(hashed_password.clone()),
            created_at: Set(now()),
        }
        .insert(db)
        .await?;
    }

    tweets::ActiveModel {
        id: NotSet,
        user_id: Set(2),
        tweet: Set("i am id 2".to_string()),
        created_at: Set(now()),
    }
    .insert(db)
    .await?;

    Ok(())
}
