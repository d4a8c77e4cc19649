//! Email ban type
//!
//! Items are email addresses or `*`-wildcard patterns over them (typically
//! whole domains, `*@example.com`). An email ban blocks the address at the
//! door; it does not terminate sessions of accounts that merely carry it.

use async_trait::async_trait;
use tracing::warn;
use validator::ValidateEmail;

use ban_core::entities::BanOutcome;
use ban_core::traits::{BanType, RepoResult};
use ban_core::value_objects::WildcardPattern;

use super::dedup_preserving_order;

/// Bans keyed on the actor's email address
pub struct EmailBanType;

impl EmailBanType {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailBanType {
    fn default() -> Self {
        Self::new()
    }
}

/// Loose shape check for wildcard address patterns
fn is_valid_email_pattern(item: &str) -> bool {
    item.contains('@') && !item.contains(char::is_whitespace)
}

#[async_trait]
impl BanType for EmailBanType {
    fn tag(&self) -> &str {
        "email"
    }

    fn user_column(&self) -> Option<&str> {
        Some("email")
    }

    fn ban_log_key(&self) -> Option<&str> {
        Some("LOG_BAN_EMAIL")
    }

    fn unban_log_key(&self) -> Option<&str> {
        Some("LOG_UNBAN_EMAIL")
    }

    async fn prepare_for_storage(&self, items: Vec<String>) -> RepoResult<Vec<String>> {
        let mut canonical = Vec::with_capacity(items.len());

        for item in items {
            let item = item.trim().to_lowercase();
            if item.is_empty() {
                continue;
            }
            if WildcardPattern::is_wildcard(&item) {
                if is_valid_email_pattern(&item) {
                    canonical.push(item);
                } else {
                    warn!(item, "invalid email pattern dropped");
                }
            } else if item.validate_email() {
                canonical.push(item);
            } else {
                warn!(item, "invalid email address dropped");
            }
        }

        Ok(dedup_preserving_order(canonical))
    }

    async fn after_ban(&self, _outcome: &BanOutcome) -> bool {
        false
    }
}
