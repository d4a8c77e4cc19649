//! Business logic services
//!
//! This module contains the ban manager, the dependency container it runs
//! against, and the service-level error type.

pub mod bootstrap;
pub mod context;
pub mod error;
pub mod manager;

// Re-export all services for convenience
pub use bootstrap::build_context;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use manager::BanManager;
