//! Shared application state for the HTTP handlers.

use std::sync::Arc;

use geodex_storage::CountryStore;
use geodex_sync::Reconciler;

/// State shared by every handler: the country store and the reconciler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CountryStore>,
    pub reconciler: Arc<Reconciler>,
}

impl AppState {
    pub fn new(store: Arc<dyn CountryStore>, reconciler: Arc<Reconciler>) -> Self {
        Self { store, reconciler }
    }
}
