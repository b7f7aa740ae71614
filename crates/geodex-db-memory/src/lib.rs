//! In-memory storage backend for the Geodex country registry.
//!
//! Used by tests and local development. Not intended for production: data
//! lives only as long as the process.

pub mod storage;

pub use storage::MemoryCountryStore;
