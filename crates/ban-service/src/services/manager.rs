//! Ban manager
//!
//! Orchestrates the ban record lifecycle: creating and revoking bans,
//! deciding whether an actor is currently banned, and sweeping expired
//! records. Per-kind behavior (canonicalization, matching, hooks) is
//! delegated to the registered ban types; this service owns the cache
//! invalidation contract and the cascading side effects.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use ban_core::entities::{Actor, BanMatch, BanOutcome, BanRecord, BanSnapshot, NewBanRecord};
use ban_core::error::DomainError;
use ban_core::traits::{BanType, LogScope};
use ban_core::value_objects::WildcardPattern;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ban manager service
pub struct BanManager<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BanManager<'a> {
    /// Create a new BanManager
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ban the given items under a mode.
    ///
    /// `start` and `end` are epoch seconds; `end == 0` means the ban never
    /// expires. Existing records for the same `(mode, item)` pairs are
    /// replaced, not merged. Items the ban type cannot canonicalize are
    /// dropped; if nothing remains, no rows are written and no side effects
    /// run.
    #[instrument(skip(self, items, reason, display_reason))]
    pub async fn ban(
        &self,
        mode: &str,
        items: Vec<String>,
        start: i64,
        end: i64,
        reason: &str,
        display_reason: &str,
    ) -> ServiceResult<()> {
        if start > end && end != 0 {
            return Err(DomainError::InvalidLength.into());
        }

        let ban_type = self.find_type(mode).ok_or_else(|| {
            DomainError::TypeNotFound(mode.to_string())
        })?;

        let ban_items = ban_type.prepare_for_storage(items).await?;

        // Prevent duplicate bans; an empty item set deletes nothing
        self.ctx
            .ban_repo()
            .delete_by_mode_and_items(mode, &ban_items)
            .await?;

        if ban_items.is_empty() {
            return Ok(());
        }

        let records: Vec<NewBanRecord> = ban_items
            .iter()
            .map(|item| NewBanRecord {
                mode: mode.to_string(),
                item: item.clone(),
                start,
                end,
                reason: reason.to_string(),
                display_reason: display_reason.to_string(),
            })
            .collect();
        self.ctx.ban_repo().insert_many(&records).await?;

        if let Some(log_key) = ban_type.ban_log_key() {
            let items_joined = ban_items.join(", ");
            self.audit(LogScope::Admin, log_key, &[reason.to_string(), items_joined.clone()])
                .await;
            self.audit(LogScope::Moderator, log_key, &[reason.to_string(), items_joined])
                .await;
        }

        let outcome = BanOutcome {
            items: ban_items.clone(),
            start,
            end,
            reason: reason.to_string(),
            display_reason: display_reason.to_string(),
        };
        if ban_type.after_ban(&outcome).await {
            if let Some(column) = ban_type.user_column() {
                self.terminate_sessions(column, &ban_items).await?;
            }
        }

        info!(mode, banned = ban_items.len(), "ban records written");

        self.destroy_snapshot().await?;
        Ok(())
    }

    /// Remove the ban records with the given ids under a mode.
    ///
    /// An empty id set removes nothing.
    #[instrument(skip(self))]
    pub async fn unban(&self, mode: &str, ban_ids: &[i64]) -> ServiceResult<()> {
        let ban_type = self.find_type(mode).ok_or_else(|| {
            DomainError::TypeNotFound(mode.to_string())
        })?;

        let removed_items = self.ctx.ban_repo().find_items_by_ids(ban_ids).await?;
        self.ctx.ban_repo().delete_by_ids(ban_ids).await?;

        if let Some(log_key) = ban_type.unban_log_key() {
            let items_joined = removed_items.join(", ");
            self.audit(LogScope::Admin, log_key, &[items_joined.clone()])
                .await;
            self.audit(LogScope::Moderator, log_key, &[items_joined]).await;
        }

        ban_type.after_unban(&removed_items).await;

        info!(mode, removed = removed_items.len(), "ban records removed");

        self.destroy_snapshot().await?;
        Ok(())
    }

    /// Decide whether the given actor is banned.
    ///
    /// Defaults to the operator actor when none is given. Reads the cached
    /// snapshot, rebuilding it from the store on a miss; the first matching
    /// row across all modes wins.
    #[instrument(skip(self, actor))]
    pub async fn check(&self, actor: Option<&Actor>) -> ServiceResult<Option<BanMatch>> {
        let actor = actor.unwrap_or_else(|| self.ctx.operator());
        let snapshot = self.load_snapshot().await?;
        let now = Utc::now().timestamp();

        for group in snapshot.modes() {
            // Records may outlive their type plugin; skip them quietly
            let Some(ban_type) = self.find_type(&group.mode) else {
                continue;
            };

            match ban_type.user_column() {
                None => {
                    if let Some(hit) = ban_type.check(&group.rows, actor) {
                        return Ok(Some(hit));
                    }
                }
                Some(column) => {
                    let Some(value) = actor.field(column) else {
                        continue;
                    };
                    for row in &group.rows {
                        // This gate admits rows whose bounded end already
                        // passed and skips permanent or still-running bans.
                        // Read the expiry-gate note in DESIGN.md before
                        // touching it.
                        if row.end > 0 && row.end < now {
                            let matched = if WildcardPattern::is_wildcard(&row.item) {
                                WildcardPattern::new(&row.item).matches(&value)
                            } else {
                                row.item == value
                            };
                            if matched {
                                return Ok(Some(row.clone()));
                            }
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Sweep expired ban records and run per-type housekeeping.
    #[instrument(skip(self))]
    pub async fn tidy(&self) -> ServiceResult<()> {
        let now = Utc::now().timestamp();
        let removed = self.ctx.ban_repo().delete_expired(now).await?;
        if removed > 0 {
            info!(removed, "expired ban records swept");
        }

        for ban_type in self.ctx.types() {
            ban_type.tidy().await;
        }

        // Without this, a swept row could stay visible in the cached
        // snapshot until its TTL runs out; see DESIGN.md.
        self.destroy_snapshot().await?;
        Ok(())
    }

    /// Current ban records for a mode, for administrative listings.
    #[instrument(skip(self))]
    pub async fn bans(&self, mode: &str) -> ServiceResult<Vec<BanRecord>> {
        if self.find_type(mode).is_none() {
            return Err(DomainError::TypeNotFound(mode.to_string()).into());
        }
        Ok(self.ctx.ban_repo().find_by_mode(mode).await?)
    }

    /// Resolve a mode tag against the registered types; first match wins
    fn find_type(&self, mode: &str) -> Option<Arc<dyn BanType>> {
        self.ctx
            .types()
            .iter()
            .find(|ban_type| ban_type.tag() == mode)
            .cloned()
    }

    /// Cached snapshot, rebuilt from the store on a miss.
    ///
    /// A failing cache read degrades to a store read; a failing cache write
    /// only costs the next check a rebuild. Neither fails the check.
    async fn load_snapshot(&self) -> ServiceResult<BanSnapshot> {
        match self.ctx.ban_cache().get().await {
            Ok(Some(snapshot)) => return Ok(snapshot),
            Ok(None) => {}
            Err(err) => {
                warn!(%err, "ban snapshot read failed, falling back to the store");
            }
        }

        let records = self.ctx.ban_repo().fetch_all().await?;
        let snapshot = BanSnapshot::from_records(&records);

        if let Err(err) = self.ctx.ban_cache().put(&snapshot).await {
            warn!(%err, "failed to cache ban snapshot");
        }

        Ok(snapshot)
    }

    /// Invalidate the cached snapshot after a mutation.
    ///
    /// This failure is propagated: a missed invalidation would leave stale
    /// enforcement results live until the TTL runs out.
    async fn destroy_snapshot(&self) -> ServiceResult<()> {
        self.ctx.ban_cache().destroy().await?;
        Ok(())
    }

    /// Best-effort audit write attributed to the operator
    async fn audit(&self, scope: LogScope, message_key: &str, params: &[String]) {
        let operator = self.ctx.operator();
        if let Err(err) = self
            .ctx
            .audit_log()
            .add(scope, operator.user_id, &operator.ip, message_key, params)
            .await
        {
            warn!(%err, message_key, "failed to write audit log entry");
        }
    }

    /// Force-logout the users a fresh ban affects.
    ///
    /// When the matched column is the user id itself the canonical items
    /// already are the ids. Otherwise exact items resolve by equality and
    /// wildcard items through the store's pattern predicate, and the id sets
    /// are unioned. Skipped entirely when the deployment carries no user
    /// lookup.
    async fn terminate_sessions(&self, column: &str, items: &[String]) -> ServiceResult<()> {
        let Some(user_lookup) = self.ctx.user_lookup() else {
            return Ok(());
        };

        let user_ids: Vec<i64> = if column == "user_id" {
            items.iter().filter_map(|item| item.parse().ok()).collect()
        } else {
            let mut exact = Vec::new();
            let mut patterns = Vec::new();
            for item in items {
                if WildcardPattern::is_wildcard(item) {
                    patterns.push(WildcardPattern::new(item));
                } else {
                    exact.push(item.clone());
                }
            }
            user_lookup.resolve_user_ids(column, &exact, &patterns).await?
        };

        if user_ids.is_empty() {
            return Ok(());
        }

        if let Some(sessions) = self.ctx.sessions() {
            let dropped = sessions.delete_sessions(&user_ids).await?;
            let keys = sessions.delete_session_keys(&user_ids).await?;
            info!(
                users = user_ids.len(),
                sessions = dropped,
                session_keys = keys,
                "terminated sessions of banned users"
            );
        }

        Ok(())
    }
}
