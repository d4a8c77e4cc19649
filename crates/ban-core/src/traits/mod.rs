//! Domain traits (ports) - interfaces the infrastructure layer implements

mod ban_type;
mod repositories;

pub use ban_type::BanType;
pub use repositories::{
    AuditLogRepository, BanCache, BanRepository, LogScope, RepoResult, SessionRepository,
    UserLookupRepository,
};
