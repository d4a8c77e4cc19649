//! # ban-service
//!
//! Application layer containing the ban manager, the built-in ban types,
//! and the dependency container they run against.

pub mod services;
pub mod types;

// Re-export the service surface at crate root
pub use services::{
    build_context, BanManager, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
pub use types::{EmailBanType, IpBanType, UserBanType};
