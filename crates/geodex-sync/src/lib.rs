//! Reconciliation engine for the Geodex country registry.
//!
//! One reconciliation pass fetches the full remote snapshot, diffs it
//! against the local store, and applies creates, updates and deletes so the
//! store exactly mirrors the snapshot. See [`Reconciler`].

pub mod error;
pub mod reconciler;
pub mod stats;

pub use error::SyncError;
pub use reconciler::Reconciler;
pub use stats::SyncStats;
