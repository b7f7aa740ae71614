//! The fetch → diff → apply reconciliation pass.

use std::collections::BTreeSet;
use std::sync::Arc;

use geodex_remote::{CountrySource, map_remote};
use geodex_storage::CountryStore;
use tracing::{debug, info, instrument, trace};

use crate::error::SyncError;
use crate::stats::SyncStats;

/// Reconciles the local country store against the remote snapshot.
///
/// A pass runs as one synchronous control flow inside a single store
/// transaction: the fetch happens first (a fetch failure aborts with zero
/// store mutations), every write of the pass commits atomically, and a
/// persistence failure rolls the whole pass back. Overlapping passes are
/// not supported.
pub struct Reconciler {
    source: Arc<dyn CountrySource>,
    store: Arc<dyn CountryStore>,
}

impl Reconciler {
    pub fn new(source: Arc<dyn CountrySource>, store: Arc<dyn CountryStore>) -> Self {
        Self { source, store }
    }

    /// Runs one reconciliation pass and reports the applied operation
    /// counts.
    ///
    /// Remote records without a valid identifier (absent, non-string or
    /// empty `cca3`) are skipped silently: not counted, not errored. Every
    /// surviving record is mapped and written unconditionally, so `updated`
    /// counts all pre-existing codes even when nothing changed.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Fetch`] when the snapshot cannot be obtained
    /// (store untouched) and [`SyncError::Storage`] when a write fails
    /// (transaction rolled back, accumulated counts discarded).
    #[instrument(skip(self))]
    pub async fn synchronize(&self) -> Result<SyncStats, SyncError> {
        let snapshot = self.source.fetch_all().await?;
        debug!(records = snapshot.len(), "Remote snapshot fetched");

        let mut tx = self.store.begin().await?;

        let existing: BTreeSet<String> = tx
            .list()
            .await?
            .into_iter()
            .map(|country| country.code)
            .collect();

        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut stats = SyncStats::default();

        for record in &snapshot {
            let Some(code) = record.identifier() else {
                trace!("Skipping remote record without identifier");
                continue;
            };
            seen.insert(code.to_string());

            let mapped = map_remote(code, record);
            if tx.find_by_code(code).await?.is_some() {
                tx.update(&mapped).await?;
                stats.updated += 1;
            } else {
                tx.insert(&mapped).await?;
                stats.created += 1;
            }
        }

        for code in existing.difference(&seen) {
            // A row that vanished between the listing and the delete is
            // simply not counted.
            if tx.delete(code).await? {
                stats.deleted += 1;
            }
        }

        tx.commit().await?;

        info!(
            created = stats.created,
            updated = stats.updated,
            deleted = stats.deleted,
            "Reconciliation pass committed"
        );

        Ok(stats)
    }
}
