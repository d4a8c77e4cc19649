//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All set-valued predicates must degrade to
//! "match nothing" on an empty input set, never to "match everything".

use async_trait::async_trait;

use crate::entities::{BanRecord, BanSnapshot, NewBanRecord};
use crate::error::DomainError;
use crate::value_objects::WildcardPattern;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Ban Repository
// ============================================================================

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// Bulk-insert fresh ban records
    async fn insert_many(&self, records: &[NewBanRecord]) -> RepoResult<()>;

    /// Delete records of a mode whose item is in the given set
    async fn delete_by_mode_and_items(&self, mode: &str, items: &[String]) -> RepoResult<u64>;

    /// Items of the records whose id is in the given set
    async fn find_items_by_ids(&self, ids: &[i64]) -> RepoResult<Vec<String>>;

    /// Delete records by id set
    async fn delete_by_ids(&self, ids: &[i64]) -> RepoResult<u64>;

    /// Every record in the ban table, in store order
    async fn fetch_all(&self) -> RepoResult<Vec<BanRecord>>;

    /// Records of a single mode, in store order
    async fn find_by_mode(&self, mode: &str) -> RepoResult<Vec<BanRecord>>;

    /// Delete bounded records whose end lies before `now`
    async fn delete_expired(&self, now: i64) -> RepoResult<u64>;
}

// ============================================================================
// User Lookup Repository
// ============================================================================

/// Resolves ban items to user ids for the session cascade and for
/// canonicalizing username items.
#[async_trait]
pub trait UserLookupRepository: Send + Sync {
    /// Ids of the users whose clean username is in the given set
    async fn find_ids_by_usernames(&self, usernames: &[String]) -> RepoResult<Vec<i64>>;

    /// Ids of the users whose `column` value equals one of `exact` or
    /// matches one of `patterns`
    async fn resolve_user_ids(
        &self,
        column: &str,
        exact: &[String],
        patterns: &[WildcardPattern],
    ) -> RepoResult<Vec<i64>>;
}

// ============================================================================
// Session Repository
// ============================================================================

/// Active-session purge for freshly banned users
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Delete every active session belonging to the given users
    async fn delete_sessions(&self, user_ids: &[i64]) -> RepoResult<u64>;

    /// Delete every persistent session key belonging to the given users
    async fn delete_session_keys(&self, user_ids: &[i64]) -> RepoResult<u64>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

/// Visibility scope of an audit-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogScope {
    Admin,
    Moderator,
    User,
}

impl LogScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::User => "user",
        }
    }
}

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an action entry attributed to the given operator
    async fn add(
        &self,
        scope: LogScope,
        actor_id: i64,
        actor_ip: &str,
        message_key: &str,
        params: &[String],
    ) -> RepoResult<()>;
}

// ============================================================================
// Ban Cache
// ============================================================================

/// Key/value cache holding the enforcement snapshot under a single key.
///
/// The TTL is owned by the implementation; callers rely on `destroy` for
/// read-after-write consistency, not on expiry.
#[async_trait]
pub trait BanCache: Send + Sync {
    async fn get(&self) -> RepoResult<Option<BanSnapshot>>;

    async fn put(&self, snapshot: &BanSnapshot) -> RepoResult<()>;

    async fn destroy(&self) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_scope_names() {
        assert_eq!(LogScope::Admin.as_str(), "admin");
        assert_eq!(LogScope::Moderator.as_str(), "moderator");
        assert_eq!(LogScope::User.as_str(), "user");
    }
}
