//! PostgreSQL implementation of AuditLogRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use ban_core::traits::{AuditLogRepository, LogScope, RepoResult};

use crate::models::AuditLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AuditLogRepository
#[derive(Clone)]
pub struct PgAuditLogRepository {
    pool: PgPool,
}

impl PgAuditLogRepository {
    /// Create a new PgAuditLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PgAuditLogRepository {
    #[instrument(skip(self, params))]
    async fn add(
        &self,
        scope: LogScope,
        actor_id: i64,
        actor_ip: &str,
        message_key: &str,
        params: &[String],
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO audit_log (log_scope, actor_id, actor_ip, message_key, params, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(scope.as_str())
        .bind(actor_id)
        .bind(actor_ip)
        .bind(message_key)
        .bind(serde_json::json!(params))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

/// Extended audit operations used by administrative listings
impl PgAuditLogRepository {
    /// Most recent entries for a scope, newest first
    #[instrument(skip(self))]
    pub async fn find_recent(&self, scope: LogScope, limit: i64) -> RepoResult<Vec<AuditLogModel>> {
        let entries = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, log_scope, actor_id, actor_ip, message_key, params, created_at
            FROM audit_log
            WHERE log_scope = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(scope.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entries)
    }
}
