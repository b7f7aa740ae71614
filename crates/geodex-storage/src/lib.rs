//! Storage abstraction for the Geodex country registry.
//!
//! Defines the [`CountryStore`] and [`StoreTransaction`] traits that every
//! backend implements, together with the [`StorageError`] taxonomy. Backends
//! live in `geodex-db-postgres` (production) and `geodex-db-memory`
//! (tests and local development).

pub mod error;
pub mod traits;

pub use error::StorageError;
pub use traits::{CountryStore, StoreTransaction};
