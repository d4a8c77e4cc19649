//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use ban_core::traits::{RepoResult, SessionRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of SessionRepository
///
/// Purges active sessions and persistent session keys when a user is banned.
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new PgSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self))]
    async fn delete_sessions(&self, user_ids: &[i64]) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM sessions WHERE session_user_id = ANY($1)
            ",
        )
        .bind(user_ids)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_session_keys(&self, user_ids: &[i64]) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM session_keys WHERE user_id = ANY($1)
            ",
        )
        .bind(user_ids)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
