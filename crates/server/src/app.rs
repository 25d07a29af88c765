// ABOUTME: Application state and Axum router construction for the mirror server.
// ABOUTME: Wires the index, JSON and health routes behind a request tracing layer.

//! Application setup and router construction.

use std::sync::Arc;

use axum::{routing::get, Router};
use mirror_extractor::Client;
use tower_http::trace::TraceLayer;

use crate::config::RenderMode;
use crate::routes::{health_handler, index_handler, items_handler};

/// Shared application state. Everything in here is read-only.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<Client>,
    pub source_url: Arc<str>,
    pub mode: RenderMode,
}

impl AppState {
    pub fn new(client: Client, source_url: impl Into<String>, mode: RenderMode) -> Self {
        Self {
            client: Arc::new(client),
            source_url: Arc::from(source_url.into()),
            mode,
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/items", get(items_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
