// src/main.rs
use catalog_backend::{build_app, config::PORT_ATTEMPTS, AppConfig, AppState, CatalogStore};
use tracing_subscriber::fmt::init as tracing_init;
use tokio::net::TcpListener;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    let config = AppConfig::from_env();

    // Open the catalog document
    let store = match CatalogStore::open(&config.data_file).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open catalog store");
            return;
        }
    };
    tracing::info!(path = %store.path().display(), "Catalog store ready");

    let app = build_app(AppState::new(store));

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=PORT_ATTEMPTS {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) if offset == 0 => {
                    tracing::warn!(%addr, error = %e, "Port in use, trying next");
                }
                Err(_) => {}
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!(
                    "Failed to bind to any port starting at {} on {}",
                    config.port,
                    config.host
                );
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}
