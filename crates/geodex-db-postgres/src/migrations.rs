//! Database migration management for the PostgreSQL storage backend.
//!
//! Migrations are embedded in the binary for single-binary deployment.

use std::borrow::Cow;

use sqlx_core::migrate::{Migration, MigrationType, Migrator};
use sqlx_postgres::PgPool;
use tracing::{info, instrument};

use crate::error::{PostgresError, Result};

/// Embedded migrations, in chronological order.
///
/// Each entry is (version, description, sql). To add a migration, create
/// the SQL file under `migrations/` and append an entry here.
macro_rules! embedded_migrations {
    () => {
        &[(
            20260801000001i64,
            "create_countries",
            include_str!("../migrations/20260801000001_create_countries.sql"),
        )]
    };
}

fn build_migrations() -> Vec<Migration> {
    embedded_migrations!()
        .iter()
        .map(|(version, description, sql)| Migration {
            version: *version,
            description: Cow::Borrowed(description),
            migration_type: MigrationType::Simple,
            sql: Cow::Borrowed(sql),
            checksum: Cow::Borrowed(&[]), // Empty checksum for embedded migrations
            no_tx: false,
        })
        .collect()
}

/// Runs all pending database migrations.
///
/// Applied migrations are tracked in the `_sqlx_migrations` table, so a
/// rerun on an up-to-date database is a no-op.
///
/// # Errors
///
/// Returns an error if a migration fails to execute.
#[instrument(skip(pool))]
pub async fn run(pool: &PgPool) -> Result<()> {
    let migrations = build_migrations();
    info!(count = migrations.len(), "Running database migrations");

    let migrator = Migrator {
        migrations: Cow::Owned(migrations),
        ignore_missing: false,
        locking: true,
        no_tx: false,
    };

    migrator
        .run(pool)
        .await
        .map_err(|e| PostgresError::Migration(format!("Migration failed: {e}")))?;

    info!("Database migrations completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_in_ascending_version_order() {
        let migrations = build_migrations();
        assert!(!migrations.is_empty());
        let versions: Vec<i64> = migrations.iter().map(|m| m.version).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        assert_eq!(versions, sorted);
    }

    #[test]
    fn countries_migration_creates_the_table() {
        let migrations = build_migrations();
        assert!(migrations[0].sql.contains("CREATE TABLE"));
        assert!(migrations[0].sql.contains("countries"));
        assert!(migrations[0].sql.contains("UNIQUE (code)"));
    }
}
