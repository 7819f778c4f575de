//! Campamentos Server
//!
//! Main entry point: camp photo listing API plus static UI and data files.

use campamentos_server::{
    camp_catalog::CampCatalog,
    state::{AppConfig, AppState},
    web_api,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campamentos_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting campamentos server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::default();
    tracing::info!(
        port = config.port,
        public_dir = %config.public_dir.display(),
        data_dir = %config.data_dir.display(),
        catalog_file = %config.catalog_file.display(),
        "Configuration loaded"
    );

    // Camp dataset is optional for the photo listing
    let catalog = match CampCatalog::load(&config.catalog_file).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(error = %e, "Camp catalog unavailable, continuing with empty catalog");
            CampCatalog::default()
        }
    };

    let state = AppState::new(config, catalog);
    let app = web_api::create_app(state.clone());

    // Start server
    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Servidor corriendo en puerto {}", state.config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
