//! Request and response bodies for decision, statement and mindset endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{
    ClarityLevel, Decision, EmotionalAttachment, FearOfRegret, LongTermThinking,
    PracticalApproach, StatementRecord,
};
use crate::domain::foundation::{DecisionId, StatementId, Timestamp};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDecisionRequest {
    pub option_a: String,
    pub option_b: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionView {
    pub id: DecisionId,
    pub option_a: String,
    pub option_b: String,
    pub created_at: Timestamp,
}

impl From<&Decision> for DecisionView {
    fn from(decision: &Decision) -> Self {
        Self {
            id: decision.id(),
            option_a: decision.option_a().to_string(),
            option_b: decision.option_b().to_string(),
            created_at: decision.created_at(),
        }
    }
}

/// Body of `POST /api/decisions/:id/statements`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatementRequest {
    /// "A", "B", "Option A" or "Option B".
    pub option: String,
    /// "pro" or "con".
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    /// Importance weight.
    pub rating: i64,
    /// "user" (default) or "ai".
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatementRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementView {
    pub id: StatementId,
    pub decision_id: DecisionId,
    pub option: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub rating: i64,
    pub source: String,
    pub created_at: Timestamp,
}

impl From<&StatementRecord> for StatementView {
    fn from(record: &StatementRecord) -> Self {
        Self {
            id: record.id,
            decision_id: record.decision_id,
            option: record.option.clone(),
            kind: record.kind.clone(),
            text: record.text.clone(),
            rating: record.importance,
            source: record.provenance.clone(),
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `POST /api/decisions/:id/mindset`. Every answer is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMindsetRequest {
    #[serde(default)]
    pub clarity_level: Option<ClarityLevel>,
    #[serde(default)]
    pub fear_of_regret: Option<FearOfRegret>,
    #[serde(default)]
    pub emotional_attachment: Option<EmotionalAttachment>,
    #[serde(default)]
    pub long_term_thinking: Option<LongTermThinking>,
    #[serde(default)]
    pub practical_approach: Option<PracticalApproach>,
    #[serde(default)]
    pub notes: Option<String>,
}
