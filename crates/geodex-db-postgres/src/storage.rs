//! PostgreSQL implementation of the `CountryStore` trait.

use async_trait::async_trait;
use geodex_core::Country;
use geodex_storage::{CountryStore, StorageError, StoreTransaction};
use sqlx_postgres::PgPool;

use crate::config::PostgresConfig;
use crate::migrations;
use crate::pool;
use crate::queries;
use crate::transaction::PgStoreTransaction;

/// PostgreSQL-backed country store.
#[derive(Debug, Clone)]
pub struct PgCountryStore {
    pool: PgPool,
}

impl PgCountryStore {
    /// Creates a new store with the given configuration.
    ///
    /// This will:
    /// 1. Create a connection pool
    /// 2. Run migrations (if configured)
    ///
    /// # Errors
    ///
    /// Returns an error if the connection pool cannot be created
    /// or if migrations fail.
    pub async fn new(config: PostgresConfig) -> Result<Self, StorageError> {
        let pool = pool::create_pool(&config).await?;

        if config.run_migrations {
            migrations::run(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Creates a store from an existing connection pool.
    ///
    /// Migrations are not run automatically when using this constructor.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CountryStore for PgCountryStore {
    async fn list(&self) -> Result<Vec<Country>, StorageError> {
        queries::list(&self.pool).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, StorageError> {
        queries::find_by_code(&self.pool, code).await
    }

    async fn insert(&self, country: &Country) -> Result<(), StorageError> {
        queries::insert(&self.pool, country).await
    }

    async fn update(&self, country: &Country) -> Result<(), StorageError> {
        queries::update(&self.pool, country).await
    }

    async fn delete(&self, code: &str) -> Result<bool, StorageError> {
        queries::delete(&self.pool, code).await
    }

    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, StorageError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::transaction(e.to_string()))?;
        Ok(Box::new(PgStoreTransaction::new(tx)))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
