//! GetMindsetHandler - Query handler for the recorded mindset of a decision.

use std::sync::Arc;

use crate::domain::decision::Mindset;
use crate::domain::foundation::DecisionId;
use crate::ports::MindsetRepository;

use super::DecisionCommandError;

#[derive(Debug, Clone)]
pub struct GetMindsetQuery {
    pub decision_id: DecisionId,
}

pub struct GetMindsetHandler {
    mindsets: Arc<dyn MindsetRepository>,
}

impl GetMindsetHandler {
    pub fn new(mindsets: Arc<dyn MindsetRepository>) -> Self {
        Self { mindsets }
    }

    pub async fn handle(&self, query: GetMindsetQuery) -> Result<Mindset, DecisionCommandError> {
        self.mindsets
            .find_by_decision(&query.decision_id)
            .await?
            .ok_or(DecisionCommandError::MindsetNotFound(query.decision_id))
    }
}
