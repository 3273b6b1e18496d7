//! ListStatementsHandler - Query handler for the statements of a decision.

use std::sync::Arc;

use crate::domain::decision::StatementRecord;
use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, StatementRepository};

use super::DecisionCommandError;

#[derive(Debug, Clone)]
pub struct ListStatementsQuery {
    pub decision_id: DecisionId,
}

/// Returns stored records as-is; validation happens at scoring time.
pub struct ListStatementsHandler {
    decisions: Arc<dyn DecisionRepository>,
    statements: Arc<dyn StatementRepository>,
}

impl ListStatementsHandler {
    pub fn new(
        decisions: Arc<dyn DecisionRepository>,
        statements: Arc<dyn StatementRepository>,
    ) -> Self {
        Self {
            decisions,
            statements,
        }
    }

    pub async fn handle(
        &self,
        query: ListStatementsQuery,
    ) -> Result<Vec<StatementRecord>, DecisionCommandError> {
        if !self.decisions.exists(&query.decision_id).await? {
            return Err(DecisionCommandError::DecisionNotFound(query.decision_id));
        }
        Ok(self.statements.list_by_decision(&query.decision_id).await?)
    }
}
