//! HTTP routes for the suggestion endpoint.

use axum::routing::post;
use axum::Router;

use super::super::AppState;
use super::handlers::suggest_pros_cons;

pub fn suggestion_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/decisions/:id/suggestions", post(suggest_pros_cons))
        .with_state(state)
}
