//! GetDecisionAnalysisHandler - Query handler that scores a decision's statements.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::analysis::{DecisionScorer, DecisionScoringResult};
use crate::domain::decision::OptionSide;
use crate::domain::foundation::{DecisionId, ValidationError};
use crate::ports::{DecisionRepository, MindsetRepository, RepositoryError, StatementRepository};

/// Query for a decision's recommendation.
#[derive(Debug, Clone)]
pub struct GetDecisionAnalysisQuery {
    pub decision_id: DecisionId,
    /// Preferred option, consulted on a tie.
    pub tie_break: Option<OptionSide>,
    /// Overrides the configured mindset default when set.
    pub use_mindset: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("decision not found: {0}")]
    DecisionNotFound(DecisionId),

    /// A stored record failed validation; nothing was scored.
    #[error("stored statement failed validation: {0}")]
    InvalidRecord(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for AnalysisError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DecisionNotFound(id) => AnalysisError::DecisionNotFound(id),
            other => AnalysisError::Storage(other.to_string()),
        }
    }
}

pub struct GetDecisionAnalysisHandler {
    decisions: Arc<dyn DecisionRepository>,
    statements: Arc<dyn StatementRepository>,
    mindsets: Arc<dyn MindsetRepository>,
    scorer: DecisionScorer,
    use_mindset_by_default: bool,
}

impl GetDecisionAnalysisHandler {
    pub fn new(
        decisions: Arc<dyn DecisionRepository>,
        statements: Arc<dyn StatementRepository>,
        mindsets: Arc<dyn MindsetRepository>,
        scorer: DecisionScorer,
    ) -> Self {
        Self {
            decisions,
            statements,
            mindsets,
            scorer,
            use_mindset_by_default: false,
        }
    }

    pub fn with_mindset_by_default(mut self, enabled: bool) -> Self {
        self.use_mindset_by_default = enabled;
        self
    }

    pub async fn handle(
        &self,
        query: GetDecisionAnalysisQuery,
    ) -> Result<DecisionScoringResult, AnalysisError> {
        if !self.decisions.exists(&query.decision_id).await? {
            return Err(AnalysisError::DecisionNotFound(query.decision_id));
        }

        let records = self.statements.list_by_decision(&query.decision_id).await?;

        let mindset = if query.use_mindset.unwrap_or(self.use_mindset_by_default) {
            self.mindsets.find_by_decision(&query.decision_id).await?
        } else {
            None
        };

        let result = self
            .scorer
            .score_records(&records, query.tie_break, mindset.as_ref())
            .map_err(|err| {
                tracing::error!(
                    decision_id = %query.decision_id,
                    field = err.field(),
                    error = %err,
                    "stored statement failed validation"
                );
                AnalysisError::InvalidRecord(err)
            })?;

        tracing::debug!(
            decision_id = %query.decision_id,
            statements = records.len(),
            score_a = result.scores.option_a,
            score_b = result.scores.option_b,
            recommended = %result.recommended_option,
            leaning = %result.leaning,
            "decision scored"
        );

        Ok(result)
    }
}
