//! Storage traits for the country store abstraction.

use async_trait::async_trait;
use geodex_core::Country;

use crate::error::StorageError;

/// The main store trait that all backends implement.
///
/// Single-record operations commit immediately. Callers that need to batch
/// writes atomically (the reconciler in particular) use
/// [`CountryStore::begin`] and perform the same operations through the
/// returned [`StoreTransaction`]. Implementations must be thread-safe
/// (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use geodex_storage::{CountryStore, StorageError};
///
/// async fn require(store: &dyn CountryStore, code: &str) -> Result<Country, StorageError> {
///     store
///         .find_by_code(code)
///         .await?
///         .ok_or_else(|| StorageError::not_found(code))
/// }
/// ```
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// Lists every country in the store.
    async fn list(&self) -> Result<Vec<Country>, StorageError>;

    /// Looks up a country by its natural identifier.
    ///
    /// Returns `None` if no such country exists.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for a missing
    /// record.
    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, StorageError>;

    /// Inserts a new country.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if the code is already taken.
    async fn insert(&self, country: &Country) -> Result<(), StorageError>;

    /// Updates an existing country, overwriting every attribute except the
    /// code.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the country does not exist.
    async fn update(&self, country: &Country) -> Result<(), StorageError>;

    /// Deletes a country by its natural identifier.
    ///
    /// Returns `true` if a record was removed and `false` if none existed,
    /// so callers can distinguish a delete from a no-op without treating
    /// the latter as an error.
    async fn delete(&self, code: &str) -> Result<bool, StorageError>;

    /// Begins a transaction for batched writes.
    ///
    /// All operations performed through the returned handle become visible
    /// to other readers only once [`StoreTransaction::commit`] succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Transaction` if a transaction cannot be
    /// started.
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, StorageError>;

    /// Returns the name of this backend for logging.
    fn backend_name(&self) -> &'static str;
}

/// A transaction over the country store.
///
/// Reads through the transaction observe its own uncommitted writes.
/// Dropping the handle without calling [`StoreTransaction::commit`] discards
/// every change.
#[async_trait]
pub trait StoreTransaction: Send {
    /// Lists every country, including uncommitted changes of this
    /// transaction.
    async fn list(&mut self) -> Result<Vec<Country>, StorageError>;

    /// Looks up a country by code within this transaction.
    async fn find_by_code(&mut self, code: &str) -> Result<Option<Country>, StorageError>;

    /// Inserts a new country within this transaction.
    async fn insert(&mut self, country: &Country) -> Result<(), StorageError>;

    /// Updates an existing country within this transaction.
    async fn update(&mut self, country: &Country) -> Result<(), StorageError>;

    /// Deletes a country within this transaction. Returns whether a record
    /// was removed.
    async fn delete(&mut self, code: &str) -> Result<bool, StorageError>;

    /// Commits all operations in this transaction.
    ///
    /// After commit the transaction is consumed and cannot be used again.
    async fn commit(self: Box<Self>) -> Result<(), StorageError>;

    /// Rolls back all operations in this transaction.
    async fn rollback(self: Box<Self>) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that CountryStore is object-safe
    fn _assert_store_object_safe(_: &dyn CountryStore) {}

    // Compile-time test that StoreTransaction is object-safe
    fn _assert_transaction_object_safe(_: &dyn StoreTransaction) {}
}
