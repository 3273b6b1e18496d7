//! HTTP handlers for decision, statement and mindset endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;

use crate::application::handlers::{
    AddStatementCommand, CreateDecisionCommand, DeleteStatementCommand, GetDecisionQuery,
    GetMindsetQuery, ListStatementsQuery, RecordMindsetCommand, UpdateStatementCommand,
};
use crate::domain::decision::Mindset;
use crate::domain::foundation::{DecisionId, StatementId};

use super::super::{ApiError, AppState};
use super::dto::{
    CreateDecisionRequest, CreateStatementRequest, DecisionView, MessageResponse,
    RecordMindsetRequest, StatementView, UpdateStatementRequest,
};

pub(crate) fn parse_decision_id(raw: &str) -> Result<DecisionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid decision ID format".to_string()))
}

fn parse_statement_id(raw: &str) -> Result<StatementId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid statement ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Decisions
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/decisions
pub async fn create_decision(
    State(state): State<AppState>,
    Json(body): Json<CreateDecisionRequest>,
) -> Result<(StatusCode, Json<DecisionView>), ApiError> {
    let decision = state
        .create_decision_handler()
        .handle(CreateDecisionCommand {
            option_a: body.option_a,
            option_b: body.option_b,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(DecisionView::from(&decision))))
}

/// GET /api/decisions/:id
pub async fn get_decision(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DecisionView>, ApiError> {
    let decision_id = parse_decision_id(&id)?;
    let decision = state
        .get_decision_handler()
        .handle(GetDecisionQuery { decision_id })
        .await?;

    Ok(Json(DecisionView::from(&decision)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Statements
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/decisions/:id/statements
pub async fn add_statement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CreateStatementRequest>,
) -> Result<(StatusCode, Json<StatementView>), ApiError> {
    let decision_id = parse_decision_id(&id)?;
    let record = state
        .add_statement_handler()
        .handle(AddStatementCommand {
            decision_id,
            option: body.option,
            kind: body.kind,
            text: body.text,
            importance: body.rating,
            provenance: body.source,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(StatementView::from(&record))))
}

/// GET /api/decisions/:id/statements
pub async fn list_statements(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StatementView>>, ApiError> {
    let decision_id = parse_decision_id(&id)?;
    let records = state
        .list_statements_handler()
        .handle(ListStatementsQuery { decision_id })
        .await?;

    Ok(Json(records.iter().map(StatementView::from).collect()))
}

/// PUT /api/statements/:id
pub async fn update_statement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatementRequest>,
) -> Result<Json<StatementView>, ApiError> {
    let statement_id = parse_statement_id(&id)?;
    let record = state
        .update_statement_handler()
        .handle(UpdateStatementCommand {
            statement_id,
            text: body.text,
            importance: body.rating,
        })
        .await?;

    Ok(Json(StatementView::from(&record)))
}

/// DELETE /api/statements/:id
pub async fn delete_statement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let statement_id = parse_statement_id(&id)?;
    state
        .delete_statement_handler()
        .handle(DeleteStatementCommand { statement_id })
        .await?;

    Ok(Json(MessageResponse {
        message: "Statement deleted".to_string(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Mindset
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/decisions/:id/mindset
pub async fn record_mindset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RecordMindsetRequest>,
) -> Result<(StatusCode, Json<Mindset>), ApiError> {
    let decision_id = parse_decision_id(&id)?;
    let mindset = state
        .record_mindset_handler()
        .handle(RecordMindsetCommand {
            decision_id,
            clarity_level: body.clarity_level,
            fear_of_regret: body.fear_of_regret,
            emotional_attachment: body.emotional_attachment,
            long_term_thinking: body.long_term_thinking,
            practical_approach: body.practical_approach,
            notes: body.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(mindset)))
}

/// GET /api/decisions/:id/mindset
pub async fn get_mindset(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Mindset>, ApiError> {
    let decision_id = parse_decision_id(&id)?;
    let mindset = state
        .get_mindset_handler()
        .handle(GetMindsetQuery { decision_id })
        .await?;

    Ok(Json(mindset))
}
