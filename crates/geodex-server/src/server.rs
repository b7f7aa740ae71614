//! Router assembly and server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use geodex_db_postgres::PgCountryStore;
use geodex_remote::RestCountriesClient;
use geodex_storage::CountryStore;
use geodex_sync::Reconciler;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Builds the application router over the given state.
pub fn build_app(state: AppState, cfg: &AppConfig) -> Router {
    let body_limit = cfg.server.body_limit_bytes;
    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        // Country CRUD
        .route(
            "/v1/countries",
            get(handlers::list_countries).post(handlers::create_country),
        )
        .route(
            "/v1/countries/{code}",
            get(handlers::get_country)
                .patch(handlers::update_country)
                .delete(handlers::delete_country),
        )
        // Synchronization trigger
        .route("/v1/sync", axum::routing::post(handlers::sync_countries))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub struct GeodexServer {
    addr: SocketAddr,
    app: Router,
}

pub struct ServerBuilder {
    config: AppConfig,
}

impl ServerBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Connects the PostgreSQL store and the remote source, then builds
    /// the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized or the HTTP
    /// client cannot be built.
    pub async fn build(self) -> anyhow::Result<GeodexServer> {
        let store: Arc<dyn CountryStore> =
            Arc::new(PgCountryStore::new(self.config.storage.clone()).await?);
        let source = Arc::new(RestCountriesClient::new(
            self.config.sync.endpoint.clone(),
            self.config.sync.timeout(),
        )?);
        let reconciler = Arc::new(Reconciler::new(source, Arc::clone(&store)));
        let state = AppState::new(store, reconciler);

        Ok(GeodexServer {
            addr: self.config.addr(),
            app: build_app(state, &self.config),
        })
    }
}

impl GeodexServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
