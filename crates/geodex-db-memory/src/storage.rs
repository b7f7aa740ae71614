//! In-memory implementation of the `CountryStore` trait.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use geodex_core::Country;
use geodex_storage::{CountryStore, StorageError, StoreTransaction};
use tokio::sync::RwLock;

type CountryMap = BTreeMap<String, Country>;

/// In-memory country store backed by a `BTreeMap` keyed by country code.
///
/// Transactions take a snapshot of the map, apply their writes to the
/// snapshot, and replace the shared map on commit. That serializes whole
/// passes rather than individual rows, which is enough for the single-writer
/// model this store is used in (tests and local development).
#[derive(Debug, Clone, Default)]
pub struct MemoryCountryStore {
    data: Arc<RwLock<CountryMap>>,
}

impl MemoryCountryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given countries.
    pub async fn seeded(countries: impl IntoIterator<Item = Country>) -> Self {
        let store = Self::new();
        {
            let mut data = store.data.write().await;
            for country in countries {
                data.insert(country.code.clone(), country);
            }
        }
        store
    }

    /// Returns the current set of stored codes, for assertions in tests.
    pub async fn codes(&self) -> Vec<String> {
        self.data.read().await.keys().cloned().collect()
    }
}

fn insert_into(map: &mut CountryMap, country: &Country) -> Result<(), StorageError> {
    if map.contains_key(&country.code) {
        return Err(StorageError::already_exists(&country.code));
    }
    map.insert(country.code.clone(), country.clone());
    Ok(())
}

fn update_into(map: &mut CountryMap, country: &Country) -> Result<(), StorageError> {
    match map.get_mut(&country.code) {
        Some(existing) => {
            *existing = country.clone();
            Ok(())
        }
        None => Err(StorageError::not_found(&country.code)),
    }
}

#[async_trait]
impl CountryStore for MemoryCountryStore {
    async fn list(&self) -> Result<Vec<Country>, StorageError> {
        Ok(self.data.read().await.values().cloned().collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, StorageError> {
        Ok(self.data.read().await.get(code).cloned())
    }

    async fn insert(&self, country: &Country) -> Result<(), StorageError> {
        insert_into(&mut *self.data.write().await, country)
    }

    async fn update(&self, country: &Country) -> Result<(), StorageError> {
        update_into(&mut *self.data.write().await, country)
    }

    async fn delete(&self, code: &str) -> Result<bool, StorageError> {
        Ok(self.data.write().await.remove(code).is_some())
    }

    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, StorageError> {
        let snapshot = self.data.read().await.clone();
        Ok(Box::new(MemoryTransaction {
            shared: Arc::clone(&self.data),
            working: snapshot,
        }))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

/// Snapshot transaction over the in-memory store.
struct MemoryTransaction {
    shared: Arc<RwLock<CountryMap>>,
    working: CountryMap,
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn list(&mut self) -> Result<Vec<Country>, StorageError> {
        Ok(self.working.values().cloned().collect())
    }

    async fn find_by_code(&mut self, code: &str) -> Result<Option<Country>, StorageError> {
        Ok(self.working.get(code).cloned())
    }

    async fn insert(&mut self, country: &Country) -> Result<(), StorageError> {
        insert_into(&mut self.working, country)
    }

    async fn update(&mut self, country: &Country) -> Result<(), StorageError> {
        update_into(&mut self.working, country)
    }

    async fn delete(&mut self, code: &str) -> Result<bool, StorageError> {
        Ok(self.working.remove(code).is_some())
    }

    async fn commit(self: Box<Self>) -> Result<(), StorageError> {
        *self.shared.write().await = self.working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StorageError> {
        // The working copy is simply dropped.
        Ok(())
    }
}
