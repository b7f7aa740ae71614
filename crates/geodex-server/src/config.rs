//! Application configuration, loaded from a TOML file with env overrides.

use std::net::SocketAddr;
use std::time::Duration;

use geodex_db_postgres::PostgresConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the database connection URL.
pub const DATABASE_URL_ENV: &str = "GEODEX_DATABASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: PostgresConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Remote bulk endpoint URL.
    pub endpoint: String,
    /// Fetch timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: geodex_remote::DEFAULT_ENDPOINT.into(),
            timeout_ms: 30_000,
        }
    }
}

impl SyncConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be > 0".into());
        }
        if self.server.body_limit_bytes == 0 {
            return Err("server.body_limit_bytes must be > 0".into());
        }
        if self.storage.pool_size == 0 {
            return Err("storage.pool_size must be > 0".into());
        }
        if self.sync.endpoint.is_empty() {
            return Err("sync.endpoint must not be empty".into());
        }
        if self.sync.timeout_ms == 0 {
            return Err("sync.timeout_ms must be > 0".into());
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        use std::net::{IpAddr, Ipv4Addr};
        let host: IpAddr = self
            .server
            .host
            .parse()
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        SocketAddr::from((host, self.server.port))
    }
}

/// Loads configuration from the given TOML file.
///
/// A missing file yields the defaults; a present but malformed file is an
/// error. `GEODEX_DATABASE_URL` overrides `storage.url` either way.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, String> {
    let mut cfg = match path {
        Some(path) if std::path::Path::new(path).exists() => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {path}: {e}"))?;
            toml::from_str(&raw).map_err(|e| format!("failed to parse {path}: {e}"))?
        }
        _ => AppConfig::default(),
    };

    if let Ok(url) = std::env::var(DATABASE_URL_ENV)
        && !url.is_empty()
    {
        cfg.storage.url = url;
    }

    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.addr().port(), 8080);
        assert_eq!(cfg.sync.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000

            [storage]
            url = "postgres://db/geodex"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.storage.url, "postgres://db/geodex");
        assert_eq!(cfg.sync.endpoint, geodex_remote::DEFAULT_ENDPOINT);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.logging.level = "verbose".into();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.sync.endpoint = String::new();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load_config(Some("/nonexistent/geodex.toml")).unwrap();
        assert_eq!(cfg.server.port, 8080);
    }
}
