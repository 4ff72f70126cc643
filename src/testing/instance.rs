use std::time::Duration;

use sea_orm::DbErr;

use crate::entities::v1::users;
use crate::prelude::*;
use crate::security::encode_token;

/// Issue an access token for `user_id` directly against the database.
pub async fn token(db: &DatabaseConnection, user_id: i32) -> Result<String, DbErr> {
    let user = users::Model::find_by_id(db, user_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", user_id)))?;
    let token = user
        .generate_token(db, Some(Duration::from_secs(3600)))
        .await?;

    Ok(encode_token(token.id))
}

/// Build an actix test service over a freshly seeded in-memory database.
///
/// Evaluates to `(service, db)` where `db` is the `Data<DatabaseConnection>`
/// registered on the app; use `db.get_ref()` where a connection is expected.
#[macro_export]
macro_rules! service {
    () => {{
        let db = ::actix_web::web::Data::new($crate::testing::setup::database().await);
        let hasher = $crate::testing::setup::password_hasher().unwrap();

        $crate::testing::setup::seed(db.get_ref(), &hasher).await.unwrap();

        let config = $crate::testing::setup::config();
        let app = ::actix_web::App::new()
            .app_data(db.clone())
            .app_data(::actix_web::web::Data::new(hasher))
            .app_data(::actix_web::web::Data::new(
                $crate::middlewares::v1::auth::Authenticated::new(
                    ::std::time::Duration::from_secs(config.auth.session_cache_ttl),
                ),
            ))
            .app_data(::actix_web::web::Data::new($crate::metrics::AppMetrics::new()))
            .app_data(::actix_web::web::Data::new(config.clone()))
            .configure(|app| $crate::router::route(app, &config));

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
