//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Ban interval where the start lies after a bounded end
    #[error("Ban start date is after the ban end date")]
    InvalidLength,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// No registered ban type carries the given mode tag
    #[error("Ban type not found: {0}")]
    TypeNotFound(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLength => "INVALID_BAN_LENGTH",
            Self::TypeNotFound(_) => "BAN_TYPE_NOT_FOUND",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidLength)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TypeNotFound(_))
    }
}
