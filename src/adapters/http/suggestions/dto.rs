//! Request and response bodies for the suggestion endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{SuggestProsConsResult, SuggestionSource};
use crate::domain::suggestion::SuggestedProsCons;

use super::super::decisions::dto::StatementView;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionRequest {
    /// Store the suggestions as AI statements.
    #[serde(default)]
    pub persist: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub source: SuggestionSource,
    pub suggestions: SuggestedProsCons,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub persisted: Vec<StatementView>,
}

impl From<SuggestProsConsResult> for SuggestionResponse {
    fn from(result: SuggestProsConsResult) -> Self {
        Self {
            source: result.source,
            suggestions: result.suggestions,
            persisted: result.persisted.iter().map(StatementView::from).collect(),
        }
    }
}
