//! Ban database model

use sqlx::FromRow;

/// Database model for the bans table
#[derive(Debug, Clone, FromRow)]
pub struct BanModel {
    pub ban_id: i64,
    pub ban_mode: String,
    pub ban_item: String,
    /// Epoch seconds; effective from
    pub ban_start: i64,
    /// Epoch seconds; 0 means the ban never expires
    pub ban_end: i64,
    pub ban_reason: String,
    pub ban_reason_display: String,
}
