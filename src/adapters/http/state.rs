//! Shared application state handed to every router.

use std::sync::Arc;

use crate::application::handlers::{
    AddStatementHandler, CreateDecisionHandler, DeleteStatementHandler,
    GetDecisionAnalysisHandler, GetDecisionHandler, GetMindsetHandler, ListStatementsHandler,
    RecordMindsetHandler, SuggestProsConsHandler, SuggestionSettings, UpdateStatementHandler,
};
use crate::domain::analysis::DecisionScorer;
use crate::ports::{AIProvider, DecisionRepository, MindsetRepository, StatementRepository};

/// Shared application state containing every port the handlers need.
#[derive(Clone)]
pub struct AppState {
    pub decisions: Arc<dyn DecisionRepository>,
    pub statements: Arc<dyn StatementRepository>,
    pub mindsets: Arc<dyn MindsetRepository>,
    /// `None` runs suggestions in fallback-only mode.
    pub ai_provider: Option<Arc<dyn AIProvider>>,
    pub scorer: DecisionScorer,
    pub use_mindset_by_default: bool,
    pub suggestion_settings: SuggestionSettings,
}

impl AppState {
    /// State over a single store implementing every repository port.
    pub fn from_store<S>(store: Arc<S>, scorer: DecisionScorer) -> Self
    where
        S: DecisionRepository + StatementRepository + MindsetRepository + 'static,
    {
        Self {
            decisions: store.clone(),
            statements: store.clone(),
            mindsets: store,
            ai_provider: None,
            scorer,
            use_mindset_by_default: false,
            suggestion_settings: SuggestionSettings::default(),
        }
    }

    pub fn with_ai_provider(mut self, provider: Arc<dyn AIProvider>) -> Self {
        self.ai_provider = Some(provider);
        self
    }

    pub fn with_mindset_by_default(mut self, enabled: bool) -> Self {
        self.use_mindset_by_default = enabled;
        self
    }

    pub fn with_suggestion_settings(mut self, settings: SuggestionSettings) -> Self {
        self.suggestion_settings = settings;
        self
    }

    pub fn create_decision_handler(&self) -> CreateDecisionHandler {
        CreateDecisionHandler::new(self.decisions.clone())
    }

    pub fn get_decision_handler(&self) -> GetDecisionHandler {
        GetDecisionHandler::new(self.decisions.clone())
    }

    pub fn add_statement_handler(&self) -> AddStatementHandler {
        AddStatementHandler::new(self.decisions.clone(), self.statements.clone())
    }

    pub fn list_statements_handler(&self) -> ListStatementsHandler {
        ListStatementsHandler::new(self.decisions.clone(), self.statements.clone())
    }

    pub fn update_statement_handler(&self) -> UpdateStatementHandler {
        UpdateStatementHandler::new(self.statements.clone())
    }

    pub fn delete_statement_handler(&self) -> DeleteStatementHandler {
        DeleteStatementHandler::new(self.statements.clone())
    }

    pub fn record_mindset_handler(&self) -> RecordMindsetHandler {
        RecordMindsetHandler::new(self.decisions.clone(), self.mindsets.clone())
    }

    pub fn get_mindset_handler(&self) -> GetMindsetHandler {
        GetMindsetHandler::new(self.mindsets.clone())
    }

    pub fn analysis_handler(&self) -> GetDecisionAnalysisHandler {
        GetDecisionAnalysisHandler::new(
            self.decisions.clone(),
            self.statements.clone(),
            self.mindsets.clone(),
            self.scorer.clone(),
        )
        .with_mindset_by_default(self.use_mindset_by_default)
    }

    pub fn suggest_pros_cons_handler(&self) -> SuggestProsConsHandler {
        SuggestProsConsHandler::new(
            self.decisions.clone(),
            self.statements.clone(),
            self.ai_provider.clone(),
            self.suggestion_settings,
        )
    }
}
