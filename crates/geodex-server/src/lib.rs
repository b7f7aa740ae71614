//! HTTP API server for the Geodex country registry.
//!
//! Exposes REST-style CRUD endpoints for countries plus a synchronization
//! trigger, wired to a PostgreSQL store and the REST Countries source.

pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use server::{GeodexServer, ServerBuilder, build_app};
pub use state::AppState;
