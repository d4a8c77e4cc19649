//! Service context - dependency container for the ban manager
//!
//! Holds the repositories, the snapshot cache, the registered ban types,
//! and the operator on whose behalf administrative actions run.

use std::sync::Arc;

use ban_core::entities::Actor;
use ban_core::traits::{
    AuditLogRepository, BanCache, BanRepository, BanType, SessionRepository, UserLookupRepository,
};

/// Service context containing all dependencies
///
/// The user lookup and session repositories are optional: deployments
/// without those tables simply lose the session cascade, nothing else.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    ban_repo: Arc<dyn BanRepository>,
    audit_log: Arc<dyn AuditLogRepository>,
    user_lookup: Option<Arc<dyn UserLookupRepository>>,
    sessions: Option<Arc<dyn SessionRepository>>,

    // Cache
    ban_cache: Arc<dyn BanCache>,

    // Registered ban types, in registration order
    types: Vec<Arc<dyn BanType>>,

    // Operator actions are attributed to; also the default check subject
    operator: Actor,
}

impl ServiceContext {
    /// Get the ban repository
    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_log(&self) -> &dyn AuditLogRepository {
        self.audit_log.as_ref()
    }

    /// Get the user lookup repository, if configured
    pub fn user_lookup(&self) -> Option<&dyn UserLookupRepository> {
        self.user_lookup.as_deref()
    }

    /// Get the session repository, if configured
    pub fn sessions(&self) -> Option<&dyn SessionRepository> {
        self.sessions.as_deref()
    }

    /// Get the snapshot cache
    pub fn ban_cache(&self) -> &dyn BanCache {
        self.ban_cache.as_ref()
    }

    /// Registered ban types, in registration order
    pub fn types(&self) -> &[Arc<dyn BanType>] {
        &self.types
    }

    /// The operator actor
    pub fn operator(&self) -> &Actor {
        &self.operator
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("types", &self.types.iter().map(|t| t.tag()).collect::<Vec<_>>())
            .field("user_lookup", &self.user_lookup.is_some())
            .field("sessions", &self.sessions.is_some())
            .field("operator", &self.operator)
            .finish()
    }
}

/// Builder for creating a ServiceContext
pub struct ServiceContextBuilder {
    ban_repo: Option<Arc<dyn BanRepository>>,
    audit_log: Option<Arc<dyn AuditLogRepository>>,
    user_lookup: Option<Arc<dyn UserLookupRepository>>,
    sessions: Option<Arc<dyn SessionRepository>>,
    ban_cache: Option<Arc<dyn BanCache>>,
    types: Vec<Arc<dyn BanType>>,
    operator: Option<Actor>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            ban_repo: None,
            audit_log: None,
            user_lookup: None,
            sessions: None,
            ban_cache: None,
            types: Vec::new(),
            operator: None,
        }
    }

    pub fn ban_repo(mut self, repo: Arc<dyn BanRepository>) -> Self {
        self.ban_repo = Some(repo);
        self
    }

    pub fn audit_log(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_log = Some(repo);
        self
    }

    pub fn user_lookup(mut self, repo: Arc<dyn UserLookupRepository>) -> Self {
        self.user_lookup = Some(repo);
        self
    }

    pub fn sessions(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.sessions = Some(repo);
        self
    }

    pub fn ban_cache(mut self, cache: Arc<dyn BanCache>) -> Self {
        self.ban_cache = Some(cache);
        self
    }

    /// Register a ban type; registration order is enforcement order
    pub fn ban_type(mut self, ban_type: Arc<dyn BanType>) -> Self {
        self.types.push(ban_type);
        self
    }

    pub fn operator(mut self, operator: Actor) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            ban_repo: self
                .ban_repo
                .ok_or_else(|| ServiceError::validation("ban_repo is required"))?,
            audit_log: self
                .audit_log
                .ok_or_else(|| ServiceError::validation("audit_log is required"))?,
            user_lookup: self.user_lookup,
            sessions: self.sessions,
            ban_cache: self
                .ban_cache
                .ok_or_else(|| ServiceError::validation("ban_cache is required"))?,
            types: self.types,
            operator: self
                .operator
                .ok_or_else(|| ServiceError::validation("operator is required"))?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
