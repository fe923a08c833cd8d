// src/lib.rs
pub mod config;
pub mod dtos;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;

pub use config::AppConfig;
pub use state::AppState;
pub use store::CatalogStore;

const INDEX_PAGE: &str = include_str!("../static/index.html");

/// API under `/api`, the product page at `/`.
pub fn build_app(state: AppState) -> Router {
    let api = routes::create_router()
        .route("/health", get(health_check));

    Router::new()
        .route("/", get(|| async { Html(INDEX_PAGE) }))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
