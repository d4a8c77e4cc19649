//! # ban-cache
//!
//! Redis caching layer for the ban enforcement snapshot.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Snapshot Store**: the full ban table grouped by mode, cached under a
//!   single key with a TTL and destroyed explicitly on every mutation
//!
//! ## Example
//!
//! ```ignore
//! use ban_cache::{BanSnapshotStore, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let snapshots = BanSnapshotStore::new(pool);
//!
//! if let Some(snapshot) = snapshots.fetch().await? {
//!     // evaluate bans against the cached snapshot
//! }
//! ```

pub mod pool;
pub mod snapshot;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export snapshot types
pub use snapshot::BanSnapshotStore;
