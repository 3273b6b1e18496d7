//! SuggestProsConsHandler - Asks the AI provider for pros/cons of both options.
//!
//! Provider failures never surface to the caller: a failed call or a response
//! that does not match the expected shape is logged and replaced by generic
//! fallback content.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::decision::{Decision, Importance, StatementRecord};
use crate::domain::foundation::{DecisionId, ValidationError};
use crate::domain::suggestion::{suggestion_prompt, SuggestedProsCons, SUGGESTION_SYSTEM_PROMPT};
use crate::ports::{
    AIProvider, CompletionRequest, DecisionRepository, MessageRole, RepositoryError,
    RequestMetadata, StatementRepository,
};

/// Where the returned suggestions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Provider,
    Fallback,
}

/// Tunables for suggestion requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    /// Importance given to persisted suggestions.
    pub importance: Importance,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 800,
            importance: Importance::new(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestProsConsCommand {
    pub decision_id: DecisionId,
    /// Store the suggestions as AI-provenance statements.
    pub persist: bool,
}

#[derive(Debug, Clone)]
pub struct SuggestProsConsResult {
    pub source: SuggestionSource,
    pub suggestions: SuggestedProsCons,
    /// Records written when `persist` was set; empty otherwise.
    pub persisted: Vec<StatementRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestProsConsError {
    #[error("decision not found: {0}")]
    DecisionNotFound(DecisionId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for SuggestProsConsError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DecisionNotFound(id) => SuggestProsConsError::DecisionNotFound(id),
            other => SuggestProsConsError::Storage(other.to_string()),
        }
    }
}

pub struct SuggestProsConsHandler {
    decisions: Arc<dyn DecisionRepository>,
    statements: Arc<dyn StatementRepository>,
    /// `None` when no provider is configured; every request falls back.
    provider: Option<Arc<dyn AIProvider>>,
    settings: SuggestionSettings,
}

impl SuggestProsConsHandler {
    pub fn new(
        decisions: Arc<dyn DecisionRepository>,
        statements: Arc<dyn StatementRepository>,
        provider: Option<Arc<dyn AIProvider>>,
        settings: SuggestionSettings,
    ) -> Self {
        Self {
            decisions,
            statements,
            provider,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: SuggestProsConsCommand,
    ) -> Result<SuggestProsConsResult, SuggestProsConsError> {
        let decision = self
            .decisions
            .find_by_id(&cmd.decision_id)
            .await?
            .ok_or(SuggestProsConsError::DecisionNotFound(cmd.decision_id))?;

        let (source, suggestions) = match self.request_suggestions(&decision).await {
            Some(suggestions) => (SuggestionSource::Provider, suggestions),
            None => (SuggestionSource::Fallback, SuggestedProsCons::fallback()),
        };

        let mut persisted = Vec::new();
        if cmd.persist {
            let records: Vec<StatementRecord> = suggestions
                .to_statements(decision.id(), self.settings.importance)?
                .iter()
                .map(StatementRecord::from)
                .collect();
            self.statements.save_all(&records).await?;
            persisted = records;
        }

        tracing::info!(
            decision_id = %decision.id(),
            source = ?source,
            suggestions = suggestions.len(),
            persisted = persisted.len(),
            "pros/cons suggested"
        );

        Ok(SuggestProsConsResult {
            source,
            suggestions,
            persisted,
        })
    }

    /// Returns validated suggestions, or `None` after logging why they are unavailable.
    async fn request_suggestions(&self, decision: &Decision) -> Option<SuggestedProsCons> {
        let Some(provider) = self.provider.as_ref() else {
            tracing::warn!(
                decision_id = %decision.id(),
                "no AI provider configured, using fallback suggestions"
            );
            return None;
        };

        let request = CompletionRequest::new(RequestMetadata::for_decision(decision.id()))
            .with_system_prompt(SUGGESTION_SYSTEM_PROMPT)
            .with_message(
                MessageRole::User,
                suggestion_prompt(decision.option_a(), decision.option_b()),
            )
            .with_temperature(self.settings.temperature)
            .with_max_tokens(self.settings.max_tokens);

        let response = match provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    decision_id = %decision.id(),
                    provider = %provider.provider_info().name,
                    error = %err,
                    "AI provider failed, using fallback suggestions"
                );
                return None;
            }
        };

        match SuggestedProsCons::parse(&response.content) {
            Ok(suggestions) => Some(suggestions),
            Err(err) => {
                tracing::warn!(
                    decision_id = %decision.id(),
                    model = %response.model,
                    error = %err,
                    "AI response did not match the expected shape, using fallback suggestions"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::decision::Provenance;
    use crate::domain::foundation::StatementId;
    use async_trait::async_trait;

    /// Delegates to the store but refuses every batch write.
    struct RejectingBatches(Arc<InMemoryStore>);

    #[async_trait]
    impl StatementRepository for RejectingBatches {
        async fn save(&self, record: &StatementRecord) -> Result<(), RepositoryError> {
            StatementRepository::save(self.0.as_ref(), record).await
        }

        async fn save_all(&self, _records: &[StatementRecord]) -> Result<(), RepositoryError> {
            Err(RepositoryError::storage("disk full"))
        }

        async fn update(&self, record: &StatementRecord) -> Result<(), RepositoryError> {
            self.0.update(record).await
        }

        async fn find_by_id(
            &self,
            id: &StatementId,
        ) -> Result<Option<StatementRecord>, RepositoryError> {
            StatementRepository::find_by_id(self.0.as_ref(), id).await
        }

        async fn list_by_decision(
            &self,
            decision_id: &DecisionId,
        ) -> Result<Vec<StatementRecord>, RepositoryError> {
            self.0.list_by_decision(decision_id).await
        }

        async fn delete(&self, id: &StatementId) -> Result<(), RepositoryError> {
            self.0.delete(id).await
        }
    }

    const VALID: &str = r#"```json
    {
      "optionA": { "pros": ["Bigger team", "Mentorship"], "cons": ["Commute"] },
      "optionB": { "pros": ["Remote"], "cons": ["Isolation", "Lower pay"] }
    }
    ```"#;

    async fn setup() -> (Arc<InMemoryStore>, Decision) {
        let store = Arc::new(InMemoryStore::new());
        let decision = Decision::new("Office job", "Remote job").unwrap();
        DecisionRepository::save(store.as_ref(), &decision).await.unwrap();
        (store, decision)
    }

    fn handler(store: &Arc<InMemoryStore>, provider: Option<Arc<dyn AIProvider>>) -> SuggestProsConsHandler {
        SuggestProsConsHandler::new(
            store.clone(),
            store.clone(),
            provider,
            SuggestionSettings::default(),
        )
    }

    fn command(decision: &Decision, persist: bool) -> SuggestProsConsCommand {
        SuggestProsConsCommand {
            decision_id: decision.id(),
            persist,
        }
    }

    #[tokio::test]
    async fn uses_provider_suggestions_when_valid() {
        let (store, decision) = setup().await;
        let provider = MockAIProvider::new().with_response(VALID);

        let result = handler(&store, Some(Arc::new(provider.clone())))
            .handle(command(&decision, false))
            .await
            .unwrap();

        assert_eq!(result.source, SuggestionSource::Provider);
        assert_eq!(result.suggestions.option_b.cons, vec!["Isolation", "Lower pay"]);
        assert!(result.persisted.is_empty());

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].messages[0].content.contains("Option A: Office job"));
        assert_eq!(calls[0].metadata.decision_id, Some(decision.id()));
    }

    #[tokio::test]
    async fn falls_back_on_provider_error() {
        let (store, decision) = setup().await;
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);

        let result = handler(&store, Some(Arc::new(provider)))
            .handle(command(&decision, false))
            .await
            .unwrap();

        assert_eq!(result.source, SuggestionSource::Fallback);
        assert_eq!(result.suggestions, SuggestedProsCons::fallback());
    }

    #[tokio::test]
    async fn falls_back_on_malformed_response() {
        let (store, decision) = setup().await;
        let provider = MockAIProvider::new().with_response("Sure! Option A is better.");

        let result = handler(&store, Some(Arc::new(provider)))
            .handle(command(&decision, false))
            .await
            .unwrap();

        assert_eq!(result.source, SuggestionSource::Fallback);
    }

    #[tokio::test]
    async fn falls_back_without_provider() {
        let (store, decision) = setup().await;

        let result = handler(&store, None)
            .handle(command(&decision, false))
            .await
            .unwrap();

        assert_eq!(result.source, SuggestionSource::Fallback);
        assert_eq!(result.suggestions.len(), 12);
    }

    #[tokio::test]
    async fn persists_suggestions_as_ai_statements() {
        let (store, decision) = setup().await;
        let provider = MockAIProvider::new().with_response(VALID);

        let result = handler(&store, Some(Arc::new(provider)))
            .handle(command(&decision, true))
            .await
            .unwrap();

        assert_eq!(result.persisted.len(), 6);
        let stored = store.list_by_decision(&decision.id()).await.unwrap();
        assert_eq!(stored.len(), 6);
        assert!(stored
            .iter()
            .all(|r| r.provenance == Provenance::Ai.as_str() && r.importance == 5));
    }

    #[tokio::test]
    async fn unknown_decision_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let id = DecisionId::new();

        let result = handler(&store, None)
            .handle(SuggestProsConsCommand {
                decision_id: id,
                persist: false,
            })
            .await;

        assert!(matches!(result, Err(SuggestProsConsError::DecisionNotFound(got)) if got == id));
    }

    #[tokio::test]
    async fn failed_batch_write_persists_nothing() {
        let (store, decision) = setup().await;
        let provider = MockAIProvider::new().with_response(VALID);
        let handler = SuggestProsConsHandler::new(
            store.clone(),
            Arc::new(RejectingBatches(store.clone())),
            Some(Arc::new(provider)),
            SuggestionSettings::default(),
        );

        let result = handler.handle(command(&decision, true)).await;

        assert!(matches!(result, Err(SuggestProsConsError::Storage(_))));
        assert_eq!(store.statement_count().await, 0);
    }
}
