//! Ban entities - persisted ban records and the cached enforcement snapshot

use serde::{Deserialize, Serialize};

/// A ban record as stored in the ban table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanRecord {
    /// Store-assigned identity
    pub id: i64,
    /// Tag of the ban type this record belongs to
    pub mode: String,
    /// Canonical identity value or `*`-wildcard pattern
    pub item: String,
    /// Epoch seconds the ban becomes effective
    pub start: i64,
    /// Epoch seconds the ban expires; 0 means it never expires
    pub end: i64,
    /// Administrative reason
    pub reason: String,
    /// Reason shown to the banned actor
    pub display_reason: String,
}

impl BanRecord {
    /// A ban with `end == 0` never expires
    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.end == 0
    }

    /// A bounded ban whose end lies before `now` is expired
    #[inline]
    pub fn is_expired(&self, now: i64) -> bool {
        self.end > 0 && self.end < now
    }
}

/// A ban record about to be inserted (no store identity yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBanRecord {
    pub mode: String,
    pub item: String,
    pub start: i64,
    pub end: i64,
    pub reason: String,
    pub display_reason: String,
}

/// One row of the cached enforcement snapshot
///
/// Carries only what `check` needs: the item to match, the expiry, and the
/// reason shown to the actor on a hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRow {
    pub item: String,
    pub end: i64,
    pub reason: String,
}

/// The row returned by a successful `check` is the matching snapshot row.
pub type BanMatch = BanRow;

/// Data handed to a ban type's `after_ban` hook
#[derive(Debug, Clone)]
pub struct BanOutcome {
    /// Canonical items that were written
    pub items: Vec<String>,
    pub start: i64,
    pub end: i64,
    pub reason: String,
    pub display_reason: String,
}

/// Rows of a single mode within the snapshot, in store order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRows {
    pub mode: String,
    pub rows: Vec<BanRow>,
}

/// The full ban table grouped by mode, as cached for `check`
///
/// Mode order is the first-seen order of the grouping pass and is preserved
/// across serialization, so enforcement iterates modes deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanSnapshot {
    modes: Vec<ModeRows>,
}

impl BanSnapshot {
    /// Group full records into a snapshot, keeping first-seen mode order
    pub fn from_records(records: &[BanRecord]) -> Self {
        let mut snapshot = Self::default();
        for record in records {
            snapshot.push(
                &record.mode,
                BanRow {
                    item: record.item.clone(),
                    end: record.end,
                    reason: record.display_reason.clone(),
                },
            );
        }
        snapshot
    }

    /// Append a row to its mode group, creating the group on first sight
    pub fn push(&mut self, mode: &str, row: BanRow) {
        match self.modes.iter_mut().find(|group| group.mode == mode) {
            Some(group) => group.rows.push(row),
            None => self.modes.push(ModeRows {
                mode: mode.to_string(),
                rows: vec![row],
            }),
        }
    }

    /// Mode groups in snapshot order
    pub fn modes(&self) -> impl Iterator<Item = &ModeRows> {
        self.modes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, mode: &str, item: &str, end: i64) -> BanRecord {
        BanRecord {
            id,
            mode: mode.to_string(),
            item: item.to_string(),
            start: 0,
            end,
            reason: "reason".to_string(),
            display_reason: "shown".to_string(),
        }
    }

    #[test]
    fn test_permanent_ban_never_expires() {
        let ban = record(1, "user", "42", 0);
        assert!(ban.is_permanent());
        assert!(!ban.is_expired(i64::MAX));
    }

    #[test]
    fn test_bounded_ban_expiry() {
        let ban = record(1, "user", "42", 100);
        assert!(!ban.is_expired(99));
        assert!(!ban.is_expired(100));
        assert!(ban.is_expired(101));
    }

    #[test]
    fn test_snapshot_groups_in_first_seen_order() {
        let records = vec![
            record(1, "ip", "10.0.0.1", 0),
            record(2, "user", "42", 0),
            record(3, "ip", "10.0.0.2", 0),
        ];
        let snapshot = BanSnapshot::from_records(&records);

        let modes: Vec<&str> = snapshot.modes().map(|g| g.mode.as_str()).collect();
        assert_eq!(modes, vec!["ip", "user"]);

        let ip_rows = snapshot.modes().next().unwrap();
        assert_eq!(ip_rows.rows.len(), 2);
        assert_eq!(ip_rows.rows[0].item, "10.0.0.1");
        assert_eq!(ip_rows.rows[1].item, "10.0.0.2");
    }

    #[test]
    fn test_snapshot_rows_carry_display_reason() {
        let snapshot = BanSnapshot::from_records(&[record(1, "user", "42", 7)]);
        let row = &snapshot.modes().next().unwrap().rows[0];
        assert_eq!(row.reason, "shown");
        assert_eq!(row.end, 7);
    }
}
