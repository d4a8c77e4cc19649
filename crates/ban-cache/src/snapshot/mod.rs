//! Ban snapshot storage module.
//!
//! Caches the grouped ban table so enforcement checks avoid a full-table
//! read on every request.

mod ban_snapshot;

pub use ban_snapshot::BanSnapshotStore;
