//! PostgreSQL implementation of BanRepository

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use ban_core::entities::{BanRecord, NewBanRecord};
use ban_core::traits::{BanRepository, RepoResult};

use crate::models::BanModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BanRepository
#[derive(Clone)]
pub struct PgBanRepository {
    pool: PgPool,
}

impl PgBanRepository {
    /// Create a new PgBanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<BanModel> for BanRecord {
    fn from(model: BanModel) -> Self {
        BanRecord {
            id: model.ban_id,
            mode: model.ban_mode,
            item: model.ban_item,
            start: model.ban_start,
            end: model.ban_end,
            reason: model.ban_reason,
            display_reason: model.ban_reason_display,
        }
    }
}

#[async_trait]
impl BanRepository for PgBanRepository {
    #[instrument(skip(self, records))]
    async fn insert_many(&self, records: &[NewBanRecord]) -> RepoResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<sqlx::Postgres>::new(
            "INSERT INTO bans (ban_mode, ban_item, ban_start, ban_end, ban_reason, ban_reason_display) ",
        );
        builder.push_values(records, |mut row, record| {
            row.push_bind(&record.mode)
                .push_bind(&record.item)
                .push_bind(record.start)
                .push_bind(record.end)
                .push_bind(&record.reason)
                .push_bind(&record.display_reason);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, items))]
    async fn delete_by_mode_and_items(&self, mode: &str, items: &[String]) -> RepoResult<u64> {
        // An empty item set binds an empty array, which matches no rows
        let result = sqlx::query(
            r"
            DELETE FROM bans WHERE ban_mode = $1 AND ban_item = ANY($2)
            ",
        )
        .bind(mode)
        .bind(items)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn find_items_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<String>> {
        let items = sqlx::query_scalar::<_, String>(
            r"
            SELECT ban_item FROM bans WHERE ban_id = ANY($1) ORDER BY ban_id
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn delete_by_ids(&self, ids: &[i64]) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM bans WHERE ban_id = ANY($1)
            ",
        )
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn fetch_all(&self) -> RepoResult<Vec<BanRecord>> {
        let models = sqlx::query_as::<_, BanModel>(
            r"
            SELECT ban_id, ban_mode, ban_item, ban_start, ban_end, ban_reason, ban_reason_display
            FROM bans
            ORDER BY ban_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(BanRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_mode(&self, mode: &str) -> RepoResult<Vec<BanRecord>> {
        let models = sqlx::query_as::<_, BanModel>(
            r"
            SELECT ban_id, ban_mode, ban_item, ban_start, ban_end, ban_reason, ban_reason_display
            FROM bans
            WHERE ban_mode = $1
            ORDER BY ban_id
            ",
        )
        .bind(mode)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(BanRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_expired(&self, now: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM bans WHERE ban_end > 0 AND ban_end < $1
            ",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
