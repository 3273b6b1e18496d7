//! HTTP handler for the suggestion endpoint.

use axum::body::Bytes;
use axum::extract::{Json, Path, State};

use crate::application::handlers::SuggestProsConsCommand;

use super::super::decisions::handlers::parse_decision_id;
use super::super::{ApiError, AppState};
use super::dto::{SuggestionRequest, SuggestionResponse};

/// POST /api/decisions/:id/suggestions
///
/// The body is optional; an empty body means `{"persist": false}`.
pub async fn suggest_pros_cons(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let decision_id = parse_decision_id(&id)?;

    let request: SuggestionRequest = if body.iter().all(u8::is_ascii_whitespace) {
        SuggestionRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|err| ApiError::BadRequest(format!("Invalid request body: {}", err)))?
    };

    let result = state
        .suggest_pros_cons_handler()
        .handle(SuggestProsConsCommand {
            decision_id,
            persist: request.persist,
        })
        .await?;

    Ok(Json(SuggestionResponse::from(result)))
}
