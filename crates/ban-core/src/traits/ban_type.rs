//! Ban type capability - per-kind behavior behind a common contract
//!
//! Each kind of ban (user id, IP address, email, ...) differs in how raw
//! input becomes storable items, which actor field its records match, and
//! what happens after a ban or unban commits. The manager stays generic and
//! delegates those decisions here.

use async_trait::async_trait;

use crate::entities::{Actor, BanMatch, BanOutcome, BanRow};
use crate::traits::repositories::RepoResult;

/// The capability set every registered ban kind implements.
///
/// Registered instances form an ordered set; the manager resolves a mode tag
/// by linear scan, first match wins.
#[async_trait]
pub trait BanType: Send + Sync {
    /// Stable identifier matched against a record's `mode`
    fn tag(&self) -> &str;

    /// Map user-supplied input into canonical storable items.
    ///
    /// Implementations may consult external lookups (e.g. resolving a
    /// username to a user id). Items that cannot be canonicalized should be
    /// dropped, not errored, so one bad entry does not void a batch; an empty
    /// return turns the whole ban call into a no-op.
    async fn prepare_for_storage(&self, items: Vec<String>) -> RepoResult<Vec<String>>;

    /// The actor field this kind matches against, or `None` when matching is
    /// fully custom and delegated to [`check`](Self::check)
    fn user_column(&self) -> Option<&str>;

    /// Custom row matching, consulted only when [`user_column`](Self::user_column)
    /// is `None`. Returns the first matching row.
    fn check(&self, rows: &[BanRow], actor: &Actor) -> Option<BanMatch> {
        let _ = (rows, actor);
        None
    }

    /// Audit message key for bans, or `None` to suppress logging
    fn ban_log_key(&self) -> Option<&str> {
        None
    }

    /// Audit message key for unbans, or `None` to suppress logging
    fn unban_log_key(&self) -> Option<&str> {
        None
    }

    /// Post-commit hook after a ban. Returning `true` asks the manager to
    /// terminate the active sessions of the affected users.
    async fn after_ban(&self, outcome: &BanOutcome) -> bool {
        let _ = outcome;
        true
    }

    /// Post-commit hook after an unban
    async fn after_unban(&self, items: &[String]) {
        let _ = items;
    }

    /// Kind-specific housekeeping during the global tidy sweep; best-effort
    async fn tidy(&self) {}
}
