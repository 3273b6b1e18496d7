//! CreateDecisionHandler - Command handler for opening a new decision.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::ports::DecisionRepository;

use super::DecisionCommandError;

/// Command to create a decision between two options.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub option_a: String,
    pub option_b: String,
}

pub struct CreateDecisionHandler {
    decisions: Arc<dyn DecisionRepository>,
}

impl CreateDecisionHandler {
    pub fn new(decisions: Arc<dyn DecisionRepository>) -> Self {
        Self { decisions }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<Decision, DecisionCommandError> {
        let decision = Decision::new(cmd.option_a, cmd.option_b)?;
        self.decisions.save(&decision).await?;

        tracing::info!(decision_id = %decision.id(), "decision created");
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::ValidationError;

    #[tokio::test]
    async fn creates_and_persists_decision() {
        let store = Arc::new(InMemoryStore::new());
        let handler = CreateDecisionHandler::new(store.clone());

        let decision = handler
            .handle(CreateDecisionCommand {
                option_a: "Take the offer".to_string(),
                option_b: "Stay".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(decision.option_a(), "Take the offer");
        assert!(store.exists(&decision.id()).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_blank_option() {
        let handler = CreateDecisionHandler::new(Arc::new(InMemoryStore::new()));

        let result = handler
            .handle(CreateDecisionCommand {
                option_a: "Take the offer".to_string(),
                option_b: "   ".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(DecisionCommandError::Validation(ValidationError::empty_field("optionB")))
        );
    }
}
