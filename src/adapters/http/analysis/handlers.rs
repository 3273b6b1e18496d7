//! HTTP handler for the analysis endpoint.

use axum::extract::{Json, Path, Query, State};

use crate::application::handlers::GetDecisionAnalysisQuery;
use crate::domain::decision::OptionSide;

use super::super::decisions::handlers::parse_decision_id;
use super::super::{ApiError, AppState};
use super::dto::{AnalysisParams, AnalysisResponse};

/// GET /api/decisions/:id/analysis?userPreference=A|B&useMindset=true
///
/// Scores the decision's stored statements and returns the recommendation.
pub async fn get_decision_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AnalysisParams>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let decision_id = parse_decision_id(&id)?;

    let tie_break = params
        .user_preference
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(str::parse::<OptionSide>)
        .transpose()
        .map_err(|err| ApiError::BadRequest(format!("Invalid userPreference: {}", err)))?;

    let result = state
        .analysis_handler()
        .handle(GetDecisionAnalysisQuery {
            decision_id,
            tie_break,
            use_mindset: params.use_mindset,
        })
        .await?;

    Ok(Json(AnalysisResponse::from(result)))
}
