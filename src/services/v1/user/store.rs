use sea_orm::{DbErr, SqlErr};

use crate::entities::v1::users::Model;
use crate::metrics::AppMetrics;
use crate::prelude::*;
use crate::requests::v1::user::SignUpRequest;
use crate::responses::v1::user::User;
use crate::security::{PasswordHasher, Validator};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;
pub const NAME_MAX_LENGTH: usize = 255;

#[::tracing::instrument(skip_all, fields(email = %request.email.trim()))]
pub async fn store(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    metrics: &AppMetrics,
    request: SignUpRequest,
) -> Result<User, Error> {
    let mut validation = Validation::new();
    let name = request.name.trim().to_string();
    let email = request.email.trim().to_lowercase();
    let profile = request.profile.trim().to_string();
    let password = request.password;

    if name.is_empty() {
        validation.add("name", "Name field is required");
    } else if !Validator::validate_length(&name, 1, NAME_MAX_LENGTH) {
        validation.add(
            "name",
            format!("Name must be at most {} characters", NAME_MAX_LENGTH),
        );
    }

    if email.is_empty() {
        validation.add("email", "Email field is required");
    } else if !Validator::validate_email(&email) {
        validation.add("email", "Email is not a valid address");
    } else if Model::email_exists(db, &email).await? {
        validation.add("email", "Email already exists");
    }

    if password.is_empty() {
        validation.add("password", "Password field is required");
    } else if !Validator::validate_length(&password, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH) {
        validation.add(
            "password",
            format!(
                "Password must be between {} and {} characters",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            ),
        );
    }

    if !validation.is_empty() {
        return Err(validation.into());
    }

    ::tracing::debug!("Hashing password with Argon2id");
    let hasher = hasher.clone();
    let hashed_password = web::block(move || hasher.hash(&password))
        .await
        .map_err(|e| {
            ::tracing::error!(error = %e, "Password hashing task failed");

            Error::internal("Internal server error")
        })??;

    let user = Model::create(db, name, email, profile, hashed_password)
        .await
        .map_err(conflict)?;

    metrics.record_sign_up();
    ::tracing::info!(user_id = user.id, "User created");

    Ok(user.into())
}

/// A concurrent sign-up can take the email between the existence check and
/// the insert; the unique index then reports it.
fn conflict(e: DbErr) -> Error {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ::tracing::debug!("Email taken by a concurrent sign-up");

            let mut validation = Validation::new();
            validation.add("email", "Email already exists");
            validation.into()
        }
        _ => e.into(),
    }
}
