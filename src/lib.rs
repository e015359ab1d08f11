pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod search_client;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state for the whole application
pub struct AppState {
    pub config: config::Config,
    pub catalog: catalog::Catalog,
    pub search_client: search_client::SearchClient,
    pub sessions: services::SessionStore,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let catalog = catalog::Catalog::demo();
        let search_client = search_client::SearchClient::new(catalog.clone());
        let sessions = services::SessionStore::new(&config, catalog.clone());

        Arc::new(Self {
            config,
            catalog,
            search_client,
            sessions,
        })
    }
}

/// Full HTTP surface: banner, health check and the `/api` tree.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Hotel Booking Demo API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
