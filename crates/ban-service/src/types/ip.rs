//! IP ban type
//!
//! Items are IPv4/IPv6 addresses or `*`-wildcard patterns over address
//! text. Banning an address terminates the sessions of users last seen on
//! a matching address.

use std::net::IpAddr;

use async_trait::async_trait;
use tracing::warn;

use ban_core::entities::BanOutcome;
use ban_core::traits::{BanType, RepoResult};
use ban_core::value_objects::WildcardPattern;

use super::dedup_preserving_order;

/// Bans keyed on the actor's IP address
pub struct IpBanType;

impl IpBanType {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IpBanType {
    fn default() -> Self {
        Self::new()
    }
}

/// A wildcard address pattern may only contain address characters and `*`
fn is_valid_address_pattern(item: &str) -> bool {
    !item.is_empty()
        && item
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == '.' || c == ':' || c == '*')
}

#[async_trait]
impl BanType for IpBanType {
    fn tag(&self) -> &str {
        "ip"
    }

    fn user_column(&self) -> Option<&str> {
        Some("ip")
    }

    fn ban_log_key(&self) -> Option<&str> {
        Some("LOG_BAN_IP")
    }

    fn unban_log_key(&self) -> Option<&str> {
        Some("LOG_UNBAN_IP")
    }

    async fn prepare_for_storage(&self, items: Vec<String>) -> RepoResult<Vec<String>> {
        let mut canonical = Vec::with_capacity(items.len());

        for item in items {
            let item = item.trim().to_lowercase();
            if item.is_empty() {
                continue;
            }
            if WildcardPattern::is_wildcard(&item) {
                if is_valid_address_pattern(&item) {
                    canonical.push(item);
                } else {
                    warn!(item, "invalid address pattern dropped");
                }
            } else if item.parse::<IpAddr>().is_ok() {
                canonical.push(item);
            } else {
                warn!(item, "invalid address dropped");
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

    #[tokio::test]
    async fn test_valid_addresses_are_kept_lowercased() {
        let ban_type = IpBanType::new();
        let items = ban_type
            .prepare_for_storage(vec![
                "192.168.5.1".to_string(),
                "2001:DB8::1".to_string(),
            ])
            .await
            .unwrap();
        assert_eq!(items, vec!["192.168.5.1", "2001:db8::1"]);
    }

    #[tokio::test]
    async fn test_wildcard_patterns_are_kept() {
        let ban_type = IpBanType::new();
        let items = ban_type
            .prepare_for_storage(vec!["192.168.*.1".to_string()])
            .await
            .unwrap();
        assert_eq!(items, vec!["192.168.*.1"]);
    }

    #[tokio::test]
    async fn test_garbage_is_dropped() {
        let ban_type = IpBanType::new();
        let items = ban_type
            .prepare_for_storage(vec![
                "not an ip".to_string(),
                "192.168.1.999".to_string(),
                "10.0.0.1; DROP".to_string(),
            ])
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}
