//! PostgreSQL storage backend for the Geodex country registry.
//!
//! Uses `sqlx-core`/`sqlx-postgres` directly (no macros). Migrations are
//! embedded in the binary and run on startup when configured.

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod storage;
pub mod transaction;

pub use config::PostgresConfig;
pub use error::PostgresError;
pub use storage::PgCountryStore;
