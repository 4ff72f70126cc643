use crate::entities::v1::tokens::Model;
use crate::middlewares::v1::auth::{Auth, Authenticated as Cache};
use crate::prelude::*;

/// Revoke the token the request was authenticated with.
///
/// Other sessions of the same user stay valid.
#[::tracing::instrument(skip(auth, db, cached), fields(user_id = auth.user_id, token_id = %auth.id))]
pub async fn logout(auth: Auth, db: &DatabaseConnection, cached: &Cache) -> Result<Success, Error> {
    Model::revoke(db, auth.id).await?;

    cached.remove(auth.id).await;

    ::tracing::info!("User logged out");

    Ok(Success)
}
