// ABOUTME: HTTP route handlers: storefront page, JSON items endpoint and health check.
// ABOUTME: Upstream failures become a 500 with an inline message or a JSON error field.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use mirror_extractor::render::{render_error, render_page};
use mirror_extractor::{ItemRecord, ScrapeError};
use serde::Serialize;
use tracing::error;

use crate::app::AppState;
use crate::config::RenderMode;

/// Client-rendered index page used in SPA mode.
pub const SPA_SHELL: &str = include_str!("../assets/index.html");

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A failed upstream scrape, reported as a 500 with a JSON `error` field.
#[derive(Debug)]
pub struct ApiError(pub ScrapeError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        Self(err)
    }
}

/// `GET /api/items`: the freshly scraped records as a JSON array.
pub async fn items_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemRecord>>, ApiError> {
    let items = state
        .client
        .fetch_items(&state.source_url)
        .await
        .inspect_err(|e| error!(error = %e, "marketplace fetch failed"))?;
    Ok(Json(items))
}

/// `GET /`: server-rendered storefront, or the SPA shell.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    if state.mode == RenderMode::Spa {
        return Html(SPA_SHELL).into_response();
    }

    match state.client.fetch_items(&state.source_url).await {
        Ok(items) => Html(render_page(&items)).into_response(),
        Err(e) => {
            error!(error = %e, "marketplace fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error(&e.to_string())),
            )
                .into_response()
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Liveness only; never contacts upstream.
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}
