//! Haversack API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use haversack_api::config::ServerConfig;
use haversack_api::error::AppError;
use haversack_api::routes;
use haversack_api::state::AppState;
use haversack_catalog::{ItemCatalog, load_catalog_from_path};
use haversack_core::clock::SystemClock;
use haversack_event_store::InMemoryEventRepository;
use haversack_inventory::application::observers::{InventoryObservers, TracingObserver};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Haversack API server");

    let config = ServerConfig::from_env()?;

    let catalog = load_catalog_from_path(&config.catalog_path)?;
    tracing::info!(
        path = %config.catalog_path.display(),
        items = catalog.keys().len(),
        "item catalog loaded"
    );

    let mut observers = InventoryObservers::new();
    observers.register(Arc::new(TracingObserver));

    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(InMemoryEventRepository::new()),
        Arc::new(catalog),
        observers,
        config.inventory,
    );

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
