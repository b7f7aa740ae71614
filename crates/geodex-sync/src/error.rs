//! Error types for reconciliation passes.

use geodex_remote::FetchError;
use geodex_storage::StorageError;

/// Errors that can abort a reconciliation pass.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The remote snapshot could not be fetched or decoded. No store
    /// mutation has occurred when this is returned.
    #[error("Sync fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A store operation failed mid-pass. The surrounding transaction is
    /// rolled back, so no partial pass is ever visible.
    #[error("Sync persistence failed: {0}")]
    Storage(#[from] StorageError),
}
