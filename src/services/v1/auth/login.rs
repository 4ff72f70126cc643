use std::time::Duration;

use crate::config::auth::AuthConfig;
use crate::entities::v1::users::Model;
use crate::metrics::AppMetrics;
use crate::middlewares::v1::auth::{Authenticated as Cache, Session};
use crate::prelude::*;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::AccessToken;
use crate::security::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Exchange an email and password for a fresh access token.
///
/// Unknown emails and wrong passwords are indistinguishable to the caller:
/// both end in 401.
#[::tracing::instrument(skip_all, fields(email = %request.email.trim()))]
pub async fn login(
    db: &DatabaseConnection,
    cached: &Cache,
    hasher: &PasswordHasher,
    config: &AuthConfig,
    metrics: &AppMetrics,
    request: LoginRequest,
) -> Result<AccessToken, Error> {
    let mut validation = Validation::new();
    let email = request.email.trim().to_lowercase();
    let password = request.password;

    if email.is_empty() {
        validation.add("email", "Email field is required");
    }

    if password.is_empty() {
        validation.add("password", "Password field is required");
    }

    if !validation.is_empty() {
        return Err(validation.into());
    }

    let user = match Model::find_by_email(db, &email).await? {
        Some(user) => user,
        None => {
            ::tracing::info!("Login rejected, unknown email");
            metrics.record_login_attempt(false);

            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let hasher = hasher.clone();
    let hashed_password = user.hashed_password.clone();
    let verified = web::block(move || hasher.verify(&password, &hashed_password))
        .await
        .map_err(|e| {
            ::tracing::error!(error = %e, "Password verification task failed");

            Error::internal("Internal server error")
        })??;

    if !verified {
        ::tracing::info!(user_id = user.id, "Login rejected, wrong password");
        metrics.record_login_attempt(false);

        return Err(Error::unauthorized(INVALID_CREDENTIALS));
    }

    let token = user
        .generate_token(db, Some(Duration::from_secs(config.token_expiration)))
        .await?;

    let session = Session {
        user_id: user.id,
        expired_at: token.expired_at,
    };
    cached.set(token.id, &session).await;

    metrics.record_login_attempt(true);
    ::tracing::info!(user_id = user.id, token_id = %token.id, "User logged in");

    Ok(token.into())
}
