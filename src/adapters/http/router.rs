//! Top-level router: every resource router plus health, tracing, CORS and timeouts.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::analysis::analysis_routes;
use super::decisions::decision_routes;
use super::suggestions::suggestion_routes;
use super::AppState;

/// Layer settings for [`app_router`].
#[derive(Debug, Clone, Default)]
pub struct RouterSettings {
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
    /// Per-request timeout; `None` disables the timeout layer.
    pub request_timeout: Option<Duration>,
}

/// Builds the full application router.
pub fn app_router(state: AppState, settings: &RouterSettings) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .merge(decision_routes(state.clone()))
        .merge(analysis_routes(state.clone()))
        .merge(suggestion_routes(state))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http());

    match settings.request_timeout {
        Some(timeout) => router.layer(TimeoutLayer::new(timeout)),
        None => router,
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}
