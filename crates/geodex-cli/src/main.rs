mod cli;
mod config;
mod output;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use geodex_db_postgres::PgCountryStore;
use geodex_remote::RestCountriesClient;
use geodex_storage::CountryStore;
use geodex_sync::Reconciler;

use cli::{Cli, Commands, SyncArgs};
use output::{print_error, print_stats, print_success};

#[tokio::main]
async fn main() {
    // Load .env file if present; it is optional for local development.
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Sync(args) => sync(cfg, args).await,
        Commands::Migrate => migrate(cfg).await,
    }
}

async fn sync(cfg: config::CliConfig, args: &SyncArgs) -> Result<()> {
    let storage = cfg
        .storage
        .with_run_migrations(!args.skip_migrations);
    let store: Arc<dyn CountryStore> = Arc::new(
        PgCountryStore::new(storage)
            .await
            .context("failed to connect to the database")?,
    );

    let endpoint = args.endpoint.as_deref().unwrap_or(&cfg.sync.endpoint);
    let timeout = Duration::from_millis(args.timeout_ms.unwrap_or(cfg.sync.timeout_ms));
    let source = Arc::new(
        RestCountriesClient::new(endpoint, timeout)
            .context("failed to build the HTTP client")?,
    );

    let reconciler = Reconciler::new(source, store);
    let stats = reconciler
        .synchronize()
        .await
        .context("synchronization failed")?;

    print_stats(&stats);
    print_success("Synchronization complete");
    Ok(())
}

async fn migrate(cfg: config::CliConfig) -> Result<()> {
    let storage = cfg.storage.with_run_migrations(true);
    PgCountryStore::new(storage)
        .await
        .context("migration failed")?;
    print_success("Migrations applied");
    Ok(())
}
