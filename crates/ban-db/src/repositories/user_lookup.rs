//! PostgreSQL implementation of UserLookupRepository

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder, Row};
use tracing::instrument;

use ban_core::error::DomainError;
use ban_core::traits::{RepoResult, UserLookupRepository};
use ban_core::value_objects::WildcardPattern;

use super::error::map_db_error;

/// PostgreSQL implementation of UserLookupRepository
#[derive(Clone)]
pub struct PgUserLookupRepository {
    pool: PgPool,
}

impl PgUserLookupRepository {
    /// Create a new PgUserLookupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Identity columns a ban type may resolve against. Anything else is
/// rejected before it can reach the statement text.
fn identity_column(column: &str) -> RepoResult<&'static str> {
    match column {
        "email" => Ok("email"),
        "ip" => Ok("ip"),
        other => Err(DomainError::DatabaseError(format!(
            "not an identity column: {other}"
        ))),
    }
}

#[async_trait]
impl UserLookupRepository for PgUserLookupRepository {
    #[instrument(skip(self, usernames))]
    async fn find_ids_by_usernames(&self, usernames: &[String]) -> RepoResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM users WHERE username_clean = ANY($1)
            ",
        )
        .bind(usernames)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }

    #[instrument(skip(self, exact, patterns))]
    async fn resolve_user_ids(
        &self,
        column: &str,
        exact: &[String],
        patterns: &[WildcardPattern],
    ) -> RepoResult<Vec<i64>> {
        if exact.is_empty() && patterns.is_empty() {
            return Ok(Vec::new());
        }

        let column = identity_column(column)?;

        let mut builder = QueryBuilder::<sqlx::Postgres>::new("SELECT user_id FROM users WHERE ");
        builder.push(column).push(" = ANY(").push_bind(exact).push(")");
        for pattern in patterns {
            builder
                .push(" OR LOWER(")
                .push(column)
                .push(") LIKE ")
                .push_bind(pattern.to_like_pattern());
        }

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.iter()
            .map(|row| row.try_get::<i64, _>("user_id").map_err(map_db_error))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_column_whitelist() {
        assert_eq!(identity_column("email").unwrap(), "email");
        assert_eq!(identity_column("ip").unwrap(), "ip");
        assert!(identity_column("user_id; DROP TABLE users").is_err());
    }
}
