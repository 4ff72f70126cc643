use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::{Cache, CacheKey, LocalCache};
use crate::prelude::*;

/// What a resolved access token stands for.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: i32,
    pub expired_at: Option<NaiveDateTime>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        matches!(self.expired_at, Some(expired_at) if expired_at <= now())
    }
}

/// Cache of resolved tokens, keyed by token id.
///
/// Cache failures are logged and treated as misses so that authentication
/// falls back to the database.
#[derive(Clone, Debug)]
pub struct Authenticated {
    cache: Arc<LocalCache>,
    ttl: Duration,
}

impl Authenticated {
    pub fn new(ttl: Duration) -> Self {
        Self::with_cache(Arc::new(LocalCache::new()), ttl)
    }

    pub fn with_cache(cache: Arc<LocalCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    #[::tracing::instrument(skip(self), fields(token_id = %token_id))]
    pub async fn get(&self, token_id: Uuid) -> Option<Session> {
        let key = CacheKey::token(token_id);

        match self.cache.get::<Session>(&key).await {
            Ok(Some(session)) if session.is_expired() => {
                ::tracing::debug!("Cached session expired");
                self.remove(token_id).await;
                None
            }
            Ok(session) => {
                ::tracing::debug!(hit = session.is_some(), "Session cache lookup");
                session
            }
            Err(e) => {
                ::tracing::error!(error = %e, "Failed to get session from cache");
                None
            }
        }
    }

    #[::tracing::instrument(skip(self, session), fields(token_id = %token_id, user_id = session.user_id))]
    pub async fn set(&self, token_id: Uuid, session: &Session) {
        let key = CacheKey::token(token_id);

        if let Err(e) = self.cache.set(&key, session, self.ttl).await {
            ::tracing::error!(error = %e, "Failed to cache session");
        }
    }

    #[::tracing::instrument(skip(self), fields(token_id = %token_id))]
    pub async fn remove(&self, token_id: Uuid) {
        let key = CacheKey::token(token_id);

        if let Err(e) = self.cache.delete(&key).await {
            ::tracing::error!(error = %e, "Failed to remove session from cache");
        }
    }
}
