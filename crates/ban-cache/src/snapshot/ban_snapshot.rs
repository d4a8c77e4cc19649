//! Ban snapshot storage in Redis.
//!
//! The whole ban table, grouped by mode, lives under one constant key. The
//! TTL only bounds staleness for readers that never mutate; writers destroy
//! the key explicitly so the next check rebuilds from the store.

use async_trait::async_trait;

use ban_core::entities::BanSnapshot;
use ban_core::error::DomainError;
use ban_core::traits::{BanCache, RepoResult};

use crate::pool::{RedisPool, RedisResult};

/// Key the snapshot is cached under
const BAN_SNAPSHOT_KEY: &str = "ban:info";

/// Default TTL for the cached snapshot (1 hour)
const DEFAULT_SNAPSHOT_TTL: u64 = 3600;

/// Redis-backed store for the ban enforcement snapshot
#[derive(Clone)]
pub struct BanSnapshotStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl BanSnapshotStore {
    /// Create a new snapshot store with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SNAPSHOT_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// TTL applied to cached snapshots
    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Fetch the cached snapshot, if any
    pub async fn fetch(&self) -> RedisResult<Option<BanSnapshot>> {
        self.pool.get_value(BAN_SNAPSHOT_KEY).await
    }

    /// Cache a snapshot with the configured TTL
    pub async fn store(&self, snapshot: &BanSnapshot) -> RedisResult<()> {
        self.pool
            .set(BAN_SNAPSHOT_KEY, snapshot, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(ttl = self.ttl_seconds, "Cached ban snapshot");
        Ok(())
    }

    /// Drop the cached snapshot, returning whether one existed
    pub async fn invalidate(&self) -> RedisResult<bool> {
        let deleted = self.pool.delete(BAN_SNAPSHOT_KEY).await?;
        if deleted {
            tracing::debug!("Destroyed cached ban snapshot");
        }
        Ok(deleted)
    }
}

fn map_cache_error(e: crate::pool::RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

#[async_trait]
impl BanCache for BanSnapshotStore {
    async fn get(&self) -> RepoResult<Option<BanSnapshot>> {
        self.fetch().await.map_err(map_cache_error)
    }

    async fn put(&self, snapshot: &BanSnapshot) -> RepoResult<()> {
        self.store(snapshot).await.map_err(map_cache_error)
    }

    async fn destroy(&self) -> RepoResult<()> {
        self.invalidate().await.map_err(map_cache_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ban_core::entities::BanRow;

    #[test]
    fn test_default_ttl() {
        let pool = RedisPool::new(crate::pool::RedisPoolConfig::default())
            .expect("pool construction does not connect");
        let store = BanSnapshotStore::new(pool);
        assert_eq!(store.ttl_seconds(), DEFAULT_SNAPSHOT_TTL);
    }

    #[test]
    fn test_snapshot_serialization_preserves_mode_order() {
        let mut snapshot = BanSnapshot::default();
        snapshot.push(
            "ip",
            BanRow {
                item: "10.0.0.*".to_string(),
                end: 0,
                reason: String::new(),
            },
        );
        snapshot.push(
            "user",
            BanRow {
                item: "42".to_string(),
                end: 100,
                reason: "spam".to_string(),
            },
        );

        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let back: BanSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        let modes: Vec<&str> = back.modes().map(|g| g.mode.as_str()).collect();
        assert_eq!(modes, vec!["ip", "user"]);
    }
}
