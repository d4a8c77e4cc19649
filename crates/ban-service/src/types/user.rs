//! User-id ban type
//!
//! Items are user ids; raw input may also name users, which is resolved
//! through the user lookup. Banning a user terminates their sessions.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use ban_core::entities::BanOutcome;
use ban_core::traits::{BanType, RepoResult, UserLookupRepository};

use super::dedup_preserving_order;

/// Bans keyed on the user id
pub struct UserBanType {
    user_lookup: Option<Arc<dyn UserLookupRepository>>,
}

impl UserBanType {
    /// Create a user ban type.
    ///
    /// Without a user lookup, username items cannot be resolved and are
    /// dropped; numeric ids still work.
    pub fn new(user_lookup: Option<Arc<dyn UserLookupRepository>>) -> Self {
        Self { user_lookup }
    }
}

#[async_trait]
impl BanType for UserBanType {
    fn tag(&self) -> &str {
        "user"
    }

    fn user_column(&self) -> Option<&str> {
        Some("user_id")
    }

    fn ban_log_key(&self) -> Option<&str> {
        Some("LOG_BAN_USER")
    }

    fn unban_log_key(&self) -> Option<&str> {
        Some("LOG_UNBAN_USER")
    }

    async fn prepare_for_storage(&self, items: Vec<String>) -> RepoResult<Vec<String>> {
        let mut canonical = Vec::with_capacity(items.len());
        let mut usernames = Vec::new();

        for item in items {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            if item.chars().all(|c| c.is_ascii_digit()) {
                canonical.push(item.to_string());
            } else {
                usernames.push(item.to_lowercase());
            }
        }

        if !usernames.is_empty() {
            match &self.user_lookup {
                Some(lookup) => {
                    let ids = lookup.find_ids_by_usernames(&usernames).await?;
                    if ids.len() < usernames.len() {
                        warn!(
                            requested = usernames.len(),
                            resolved = ids.len(),
                            "some usernames did not resolve to user ids"
                        );
                    }
                    canonical.extend(ids.iter().map(ToString::to_string));
                }
                None => {
                    warn!(
                        dropped = usernames.len(),
                        "username items dropped, user lookup is not configured"
                    );
                }
            }
        }

        Ok(dedup_preserving_order(canonical))
    }

    async fn after_ban(&self, _outcome: &BanOutcome) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ban_core::error::DomainError;
    use ban_core::value_objects::WildcardPattern;

    struct FakeLookup;

    #[async_trait]
    impl UserLookupRepository for FakeLookup {
        async fn find_ids_by_usernames(&self, usernames: &[String]) -> RepoResult<Vec<i64>> {
            Ok(usernames
                .iter()
                .filter_map(|name| match name.as_str() {
                    "alice" => Some(7),
                    "bob" => Some(8),
                    _ => None,
                })
                .collect())
        }

        async fn resolve_user_ids(
            &self,
            _column: &str,
            _exact: &[String],
            _patterns: &[WildcardPattern],
        ) -> RepoResult<Vec<i64>> {
            Err(DomainError::InternalError("not used".to_string()))
        }
    }

    #[tokio::test]
    async fn test_numeric_ids_pass_through() {
        let ban_type = UserBanType::new(None);
        let items = ban_type
            .prepare_for_storage(vec!["42".to_string(), " 7 ".to_string()])
            .await
            .unwrap();
        assert_eq!(items, vec!["42", "7"]);
    }

    #[tokio::test]
    async fn test_usernames_resolve_case_insensitively() {
        let ban_type = UserBanType::new(Some(Arc::new(FakeLookup)));
        let items = ban_type
            .prepare_for_storage(vec!["Alice".to_string(), "unknown".to_string()])
            .await
            .unwrap();
        assert_eq!(items, vec!["7"]);
    }

    #[tokio::test]
    async fn test_duplicate_resolutions_collapse() {
        let ban_type = UserBanType::new(Some(Arc::new(FakeLookup)));
        let items = ban_type
            .prepare_for_storage(vec!["7".to_string(), "alice".to_string()])
            .await
            .unwrap();
        assert_eq!(items, vec!["7"]);
    }

    #[tokio::test]
    async fn test_usernames_dropped_without_lookup() {
        let ban_type = UserBanType::new(None);
        let items = ban_type
            .prepare_for_storage(vec!["alice".to_string()])
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}
