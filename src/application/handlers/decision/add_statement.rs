//! AddStatementHandler - Command handler for recording a rated pro or con.

use std::sync::Arc;

use crate::domain::decision::{
    Importance, OptionSide, Provenance, Statement, StatementKind, StatementRecord,
};
use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, StatementRepository};

use super::DecisionCommandError;

/// Command to add a statement. Labels arrive as raw strings from the client.
#[derive(Debug, Clone)]
pub struct AddStatementCommand {
    pub decision_id: DecisionId,
    /// "A", "B", "Option A" or "Option B".
    pub option: String,
    /// "pro" or "con".
    pub kind: String,
    pub text: String,
    pub importance: i64,
    /// "user" or "ai"; defaults to user.
    pub provenance: Option<String>,
}

pub struct AddStatementHandler {
    decisions: Arc<dyn DecisionRepository>,
    statements: Arc<dyn StatementRepository>,
}

impl AddStatementHandler {
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
        cmd: AddStatementCommand,
    ) -> Result<StatementRecord, DecisionCommandError> {
        if !self.decisions.exists(&cmd.decision_id).await? {
            return Err(DecisionCommandError::DecisionNotFound(cmd.decision_id));
        }

        let option: OptionSide = cmd.option.parse()?;
        let kind: StatementKind = cmd.kind.parse()?;
        let importance = Importance::try_from_i64(cmd.importance)?;
        let provenance = match cmd.provenance.as_deref() {
            Some(raw) => raw.parse()?,
            None => Provenance::User,
        };

        let statement =
            Statement::new(cmd.decision_id, option, kind, cmd.text, importance, provenance)?;
        let record = StatementRecord::from(&statement);
        self.statements.save(&record).await?;

        tracing::debug!(
            decision_id = %cmd.decision_id,
            statement_id = %record.id,
            option = %record.option,
            kind = %record.kind,
            importance = record.importance,
            "statement added"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::decision::Decision;
    use crate::domain::foundation::ValidationError;

    async fn setup() -> (Arc<InMemoryStore>, DecisionId) {
        let store = Arc::new(InMemoryStore::new());
        let decision = Decision::new("Job X", "Job Y").unwrap();
        DecisionRepository::save(store.as_ref(), &decision).await.unwrap();
        (store, decision.id())
    }

    fn command(decision_id: DecisionId) -> AddStatementCommand {
        AddStatementCommand {
            decision_id,
            option: "Option A".to_string(),
            kind: "pro".to_string(),
            text: "Higher salary".to_string(),
            importance: 8,
            provenance: None,
        }
    }

    #[tokio::test]
    async fn stores_normalized_record() {
        let (store, id) = setup().await;
        let handler = AddStatementHandler::new(store.clone(), store.clone());

        let record = handler.handle(command(id)).await.unwrap();

        assert_eq!(record.option, "A");
        assert_eq!(record.kind, "pro");
        assert_eq!(record.provenance, "user");
        assert_eq!(store.list_by_decision(&id).await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn rejects_unknown_option_label() {
        let (store, id) = setup().await;
        let handler = AddStatementHandler::new(store.clone(), store.clone());

        let mut cmd = command(id);
        cmd.option = "C".to_string();
        let result = handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(DecisionCommandError::Validation(ValidationError::InvalidFormat { ref field, .. }))
                if field == "option"
        ));
        assert_eq!(store.statement_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_negative_importance() {
        let (store, id) = setup().await;
        let handler = AddStatementHandler::new(store.clone(), store.clone());

        let mut cmd = command(id);
        cmd.importance = -1;

        assert!(matches!(
            handler.handle(cmd).await,
            Err(DecisionCommandError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[tokio::test]
    async fn unknown_decision_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let handler = AddStatementHandler::new(store.clone(), store.clone());
        let id = DecisionId::new();

        assert_eq!(
            handler.handle(command(id)).await,
            Err(DecisionCommandError::DecisionNotFound(id))
        );
    }
}
