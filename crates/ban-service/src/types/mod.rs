//! Built-in ban types
//!
//! One concrete kind per module: user-id bans, IP bans, and email bans.
//! Additional kinds only need a `BanType` implementation registered with the
//! service context.

mod email;
mod ip;
mod user;

pub use email::EmailBanType;
pub use ip::IpBanType;
pub use user::UserBanType;

/// Drop repeated items while keeping first occurrences in order.
///
/// Canonicalization may map distinct inputs onto one item (a user id given
/// both numerically and by name); storing it twice would break the
/// one-record-per-item replace semantics.
fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
