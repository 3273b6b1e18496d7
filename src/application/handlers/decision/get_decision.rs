//! GetDecisionHandler - Query handler for a single decision.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::domain::foundation::DecisionId;
use crate::ports::DecisionRepository;

use super::DecisionCommandError;

#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub decision_id: DecisionId,
}

pub struct GetDecisionHandler {
    decisions: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    pub fn new(decisions: Arc<dyn DecisionRepository>) -> Self {
        Self { decisions }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<Decision, DecisionCommandError> {
        self.decisions
            .find_by_id(&query.decision_id)
            .await?
            .ok_or(DecisionCommandError::DecisionNotFound(query.decision_id))
    }
}
