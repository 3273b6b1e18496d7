//! DeleteStatementHandler - Command handler for removing a statement.

use std::sync::Arc;

use crate::domain::foundation::StatementId;
use crate::ports::StatementRepository;

use super::DecisionCommandError;

#[derive(Debug, Clone)]
pub struct DeleteStatementCommand {
    pub statement_id: StatementId,
}

pub struct DeleteStatementHandler {
    statements: Arc<dyn StatementRepository>,
}

impl DeleteStatementHandler {
    pub fn new(statements: Arc<dyn StatementRepository>) -> Self {
        Self { statements }
    }

    pub async fn handle(&self, cmd: DeleteStatementCommand) -> Result<(), DecisionCommandError> {
        self.statements.delete(&cmd.statement_id).await?;
        tracing::debug!(statement_id = %cmd.statement_id, "statement deleted");
        Ok(())
    }
}
