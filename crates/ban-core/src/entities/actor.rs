//! Actor entity - the identity a ban check runs against

/// The identity fields ban types match against.
///
/// Also used for the operator performing administrative actions, whose id and
/// IP are attached to audit-log entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub ip: String,
    pub email: String,
}

impl Actor {
    pub fn new(user_id: i64, ip: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            ip: ip.into(),
            email: email.into(),
        }
    }

    /// Value of the identity field a ban type's `user_column` names.
    ///
    /// Returns `None` for columns this actor does not carry, which makes the
    /// corresponding rows unmatchable rather than an error.
    pub fn field(&self, column: &str) -> Option<String> {
        match column {
            "user_id" => Some(self.user_id.to_string()),
            "ip" => Some(self.ip.clone()),
            "email" => Some(self.email.clone()),
            _ => None,
        }
    }
}
