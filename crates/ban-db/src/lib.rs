//! # ban-db
//!
//! Database layer implementing the ban-core repository traits with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the ports defined in
//! `ban-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations for the ban table, user lookup,
//!   session purge, and audit log
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ban_db::pool::{create_pool, DatabaseConfig};
//! use ban_db::PgBanRepository;
//! use ban_core::traits::BanRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let ban_repo = PgBanRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAuditLogRepository, PgBanRepository, PgSessionRepository, PgUserLookupRepository,
};
