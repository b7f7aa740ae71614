//! Operation counts reported by a reconciliation pass.

use serde::Serialize;

/// Counts of the operations applied by one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncStats {
    /// Countries inserted because their code was new.
    pub created: u64,
    /// Countries overwritten because their code already existed.
    pub updated: u64,
    /// Countries removed because their code left the remote snapshot.
    pub deleted: u64,
}

impl SyncStats {
    /// Total number of applied operations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.created + self.updated + self.deleted
    }
}

impl std::fmt::Display for SyncStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "created={} updated={} deleted={}",
            self.created, self.updated, self.deleted
        )
    }
}
