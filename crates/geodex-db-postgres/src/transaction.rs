//! Transactional writes over the PostgreSQL store.

use async_trait::async_trait;
use geodex_core::Country;
use geodex_storage::{StorageError, StoreTransaction};
use sqlx_postgres::PgTransaction;

use crate::queries;

/// A database transaction implementing the store transaction trait.
///
/// Dropping the handle without committing rolls the transaction back,
/// which is exactly the abort behavior the reconciler relies on.
pub struct PgStoreTransaction {
    tx: PgTransaction<'static>,
}

impl PgStoreTransaction {
    pub(crate) fn new(tx: PgTransaction<'static>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl StoreTransaction for PgStoreTransaction {
    async fn list(&mut self) -> Result<Vec<Country>, StorageError> {
        queries::list(&mut *self.tx).await
    }

    async fn find_by_code(&mut self, code: &str) -> Result<Option<Country>, StorageError> {
        queries::find_by_code(&mut *self.tx, code).await
    }

    async fn insert(&mut self, country: &Country) -> Result<(), StorageError> {
        queries::insert(&mut *self.tx, country).await
    }

    async fn update(&mut self, country: &Country) -> Result<(), StorageError> {
        queries::update(&mut *self.tx, country).await
    }

    async fn delete(&mut self, code: &str) -> Result<bool, StorageError> {
        queries::delete(&mut *self.tx, code).await
    }

    async fn commit(self: Box<Self>) -> Result<(), StorageError> {
        self.tx
            .commit()
            .await
            .map_err(|e| StorageError::transaction(e.to_string()))
    }

    async fn rollback(self: Box<Self>) -> Result<(), StorageError> {
        self.tx
            .rollback()
            .await
            .map_err(|e| StorageError::transaction(e.to_string()))
    }
}
