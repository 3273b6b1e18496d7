//! UpdateStatementHandler - Command handler for editing a statement's text or importance.

use std::sync::Arc;

use crate::domain::decision::{Importance, Statement, StatementRecord};
use crate::domain::foundation::StatementId;
use crate::ports::StatementRepository;

use super::DecisionCommandError;

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateStatementCommand {
    pub statement_id: StatementId,
    pub text: Option<String>,
    pub importance: Option<i64>,
}

pub struct UpdateStatementHandler {
    statements: Arc<dyn StatementRepository>,
}

impl UpdateStatementHandler {
    pub fn new(statements: Arc<dyn StatementRepository>) -> Self {
        Self { statements }
    }

    pub async fn handle(
        &self,
        cmd: UpdateStatementCommand,
    ) -> Result<StatementRecord, DecisionCommandError> {
        let stored = self
            .statements
            .find_by_id(&cmd.statement_id)
            .await?
            .ok_or(DecisionCommandError::StatementNotFound(cmd.statement_id))?;

        let mut statement = Statement::try_from(&stored)?;
        if let Some(text) = cmd.text {
            statement.update_text(text)?;
        }
        if let Some(importance) = cmd.importance {
            statement.update_importance(Importance::try_from_i64(importance)?);
        }

        let record = StatementRecord::from(&statement);
        self.statements.update(&record).await?;

        tracing::debug!(statement_id = %record.id, "statement updated");
        Ok(record)
    }
}
