mod local;

pub use local::LocalCache;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;

/// Key/value store with per-entry expiry
#[async_trait]
pub trait Cache: Send + Sync + Debug {
    /// `None` when the key is missing or expired
    async fn get<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send;

    async fn set<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync;

    async fn delete(&self, key: &str) -> Result<()>;
}

/// Builder for consistent cache key naming
pub struct CacheKey;

impl CacheKey {
    /// Build a token cache key
    pub fn token(id: impl std::fmt::Display) -> String {
        format!("token:{}", id)
    }
}
