use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use super::Cache;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct CacheEntry {
    /// bincode encoded value
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Process-local cache backed by a sharded `DashMap`
///
/// Expired entries are dropped lazily on read and by a background sweep
/// that runs every minute for as long as the cache is alive.
#[derive(Debug)]
pub struct LocalCache {
    store: Arc<DashMap<String, CacheEntry>>,
    cleanup_handle: Option<JoinHandle<()>>,
}

impl LocalCache {
    /// Shard count defaults to four shards per CPU, rounded up to a power of two
    pub fn new() -> Self {
        Self::with_shard_count((num_cpus::get() * 4).next_power_of_two())
    }

    /// `shard_count` must be a power of two
    pub fn with_shard_count(shard_count: usize) -> Self {
        let store = Arc::new(DashMap::with_shard_amount(shard_count));
        let cleanup_handle = Self::start_cleanup_task(Arc::clone(&store));

        Self {
            store,
            cleanup_handle: Some(cleanup_handle),
        }
    }

    fn start_cleanup_task(store: Arc<DashMap<String, CacheEntry>>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

            loop {
                interval.tick().await;

                let before = store.len();
                store.retain(|_, entry| !entry.is_expired());
                let removed = before.saturating_sub(store.len());

                if removed > 0 {
                    ::tracing::debug!(removed, "Evicted expired cache entries");
                }
            }
        })
    }

    /// Number of entries currently held, expired or not
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for LocalCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LocalCache {
    fn drop(&mut self) {
        if let Some(handle) = self.cleanup_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl Cache for LocalCache {
    async fn get<V>(&self, key: &str) -> Result<Option<V>>
    where
        V: for<'de> Deserialize<'de> + Send,
    {
        let entry = match self.store.get(key) {
            None => return Ok(None),
            Some(entry) => entry,
        };

        if entry.is_expired() {
            drop(entry);
            self.store.remove(key);
            return Ok(None);
        }

        let value = bincode::deserialize::<V>(&entry.data)
            .context("Failed to deserialize cached value")?;

        Ok(Some(value))
    }

    async fn set<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<()>
    where
        V: Serialize + Send + Sync,
    {
        let data = bincode::serialize(value).context("Failed to serialize value")?;

        self.store.insert(key.to_string(), CacheEntry::new(data, ttl));

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.remove(key);
        Ok(())
    }
}
