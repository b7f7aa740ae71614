use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "geodex")]
#[command(about = "Geodex CLI — manage the country registry")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (default: geodex.toml)
    #[arg(short, long, global = true, env = "GEODEX_CONFIG")]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the remote dataset and reconcile the registry against it
    Sync(SyncArgs),
    /// Apply pending database migrations and exit
    Migrate,
}

#[derive(clap::Args)]
pub struct SyncArgs {
    /// Remote dataset endpoint (overrides the config file)
    #[arg(long, env = "GEODEX_SYNC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in milliseconds (overrides the config file)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Do not run migrations before syncing
    #[arg(long)]
    pub skip_migrations: bool,
}
