//! Configuration loading for the CLI.
//!
//! Reads the same `geodex.toml` the server reads, but only the sections
//! the CLI needs: the storage backend and the remote sync source.

use anyhow::{Context, Result};
use geodex_db_postgres::PostgresConfig;
use geodex_remote::DEFAULT_ENDPOINT;
use serde::Deserialize;

pub const DATABASE_URL_ENV: &str = "GEODEX_DATABASE_URL";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub storage: PostgresConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Loads the configuration from the given path, or `geodex.toml` by
/// default. A missing file yields the defaults; the
/// `GEODEX_DATABASE_URL` environment variable overrides the storage URL
/// either way.
pub fn load(path: Option<&str>) -> Result<CliConfig> {
    let path = path.unwrap_or("geodex.toml");

    let mut config = if std::path::Path::new(path).exists() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse config file {path}"))?
    } else {
        CliConfig::default()
    };

    if let Ok(url) = std::env::var(DATABASE_URL_ENV)
        && !url.is_empty()
    {
        config.storage.url = url;
    }

    Ok(config)
}
