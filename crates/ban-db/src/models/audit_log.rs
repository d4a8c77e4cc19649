//! Audit log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for the audit_log table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    /// Visibility scope: admin, moderator, or user
    pub log_scope: String,
    pub actor_id: i64,
    pub actor_ip: String,
    pub message_key: String,
    /// JSON array of free-form message parameters
    pub params: JsonValue,
    pub created_at: DateTime<Utc>,
}
