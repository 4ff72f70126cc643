use std::future::Future;
use std::pin::Pin;

use actix_web::FromRequest;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use sea_orm::EntityTrait;

use crate::entities::v1::tokens;
use crate::prelude::*;
use crate::security::decode_token;

use super::{Authenticated, Session};

/// Authenticated caller, extracted from the `Authorization` header.
///
/// The header carries the access token either bare or as `Bearer <token>`.
/// Any failure to resolve it to a live token rejects the request with 401.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Auth {
    /// Token id the request was authenticated with
    pub id: Uuid,
    pub user_id: i32,
}

impl Auth {
    fn token(req: &HttpRequest) -> Result<Uuid, Error> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .ok_or_else(|| Error::unauthorized("Missing authorization header"))?;
        let header = header
            .to_str()
            .map_err(|_| Error::unauthorized("Invalid authorization header"))?;
        let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();

        if token.is_empty() {
            return Err(Error::unauthorized("Missing access token"));
        }

        decode_token(token).ok_or_else(|| Error::unauthorized("Invalid access token"))
    }

    /// Drop a just cached session whose token was revoked in the meantime.
    ///
    /// Logout deletes the row before evicting the cache entry, so a lookup
    /// racing it either sees the row gone here or has its entry evicted.
    async fn confirm(db: &DatabaseConnection, authenticated: &Authenticated, id: Uuid) -> Result<(), Error> {
        if tokens::Entity::find_by_id(id).one(db).await?.is_some() {
            return Ok(());
        }

        authenticated.remove(id).await;
        ::tracing::debug!(token_id = %id, "Token revoked while authenticating");

        Err(Error::unauthorized("Access token revoked"))
    }
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let start = std::time::Instant::now();

        let db = req.app_data::<Data<DatabaseConnection>>().cloned();
        let authenticated = req.app_data::<Data<Authenticated>>().cloned();
        let token = Self::token(req);

        Box::pin(async move {
            let (db, authenticated) = match (db, authenticated) {
                (Some(db), Some(authenticated)) => (db, authenticated),
                _ => {
                    ::tracing::error!("Authentication dependencies are not registered");

                    return Err(Error::internal("Internal server error"));
                }
            };

            let id = match token {
                Ok(id) => id,
                Err(e) => {
                    ::tracing::debug!(reason = %e, "Rejected request");

                    return Err(e);
                }
            };

            if let Some(session) = authenticated.get(id).await {
                ::tracing::debug!(elapsed = ?start.elapsed(), "Authenticated from cache");

                return Ok(Auth {
                    id,
                    user_id: session.user_id,
                });
            }

            let token = tokens::Entity::find_by_id(id).one(db.get_ref()).await?;
            let session = match token {
                Some(token) => Session {
                    user_id: token.user_id,
                    expired_at: token.expired_at,
                },
                None => {
                    ::tracing::debug!(token_id = %id, "Token not found");

                    return Err(Error::unauthorized("Invalid access token"));
                }
            };

            if session.is_expired() {
                ::tracing::debug!(token_id = %id, "Token expired");

                return Err(Error::unauthorized("Access token expired"));
            }

            authenticated.set(id, &session).await;
            Self::confirm(db.get_ref(), &authenticated, id).await?;

            ::tracing::debug!(elapsed = ?start.elapsed(), "Authenticated from database");

            Ok(Auth {
                id,
                user_id: session.user_id,
            })
        })
    }
}
