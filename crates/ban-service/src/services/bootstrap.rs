//! Production wiring for the ban subsystem
//!
//! Builds a [`ServiceContext`] backed by PostgreSQL and Redis from the
//! shared application configuration. Embedders with exotic deployments can
//! assemble the context by hand through [`ServiceContextBuilder`] instead.

use std::sync::Arc;

use ban_cache::{BanSnapshotStore, RedisPool};
use ban_common::{AppConfig, AppError};
use ban_core::entities::Actor;
use ban_core::traits::UserLookupRepository;
use ban_db::pool::{create_pool, DatabaseConfig};
use ban_db::{
    PgAuditLogRepository, PgBanRepository, PgSessionRepository, PgUserLookupRepository,
};

use super::context::{ServiceContext, ServiceContextBuilder};
use super::error::{ServiceError, ServiceResult};
use crate::types::{EmailBanType, IpBanType, UserBanType};

/// Build a service context with the stock PostgreSQL and Redis adapters
/// and the built-in ban types registered in enforcement order.
pub async fn build_context(config: &AppConfig, operator: Actor) -> ServiceResult<ServiceContext> {
    let pool = create_pool(&DatabaseConfig::from_app_config(&config.database))
        .await
        .map_err(|e| ServiceError::App(AppError::Database(e.to_string())))?;

    let redis = RedisPool::from_config(&config.redis)
        .map_err(|e| ServiceError::App(AppError::Cache(e.to_string())))?;
    let snapshots = BanSnapshotStore::with_ttl(redis, config.ban.snapshot_ttl_seconds);

    let user_lookup: Arc<dyn UserLookupRepository> =
        Arc::new(PgUserLookupRepository::new(pool.clone()));

    ServiceContextBuilder::new()
        .ban_repo(Arc::new(PgBanRepository::new(pool.clone())))
        .audit_log(Arc::new(PgAuditLogRepository::new(pool.clone())))
        .user_lookup(user_lookup.clone())
        .sessions(Arc::new(PgSessionRepository::new(pool)))
        .ban_cache(Arc::new(snapshots))
        .ban_type(Arc::new(UserBanType::new(Some(user_lookup))))
        .ban_type(Arc::new(IpBanType::new()))
        .ban_type(Arc::new(EmailBanType::new()))
        .operator(operator)
        .build()
}
