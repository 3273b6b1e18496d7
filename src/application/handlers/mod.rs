//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod decision;
pub mod suggestion;

pub use analysis::{AnalysisError, GetDecisionAnalysisHandler, GetDecisionAnalysisQuery};
pub use decision::{
    AddStatementCommand, AddStatementHandler, CreateDecisionCommand, CreateDecisionHandler,
    DecisionCommandError, DeleteStatementCommand, DeleteStatementHandler, GetDecisionHandler,
    GetDecisionQuery, GetMindsetHandler, GetMindsetQuery, ListStatementsHandler,
    ListStatementsQuery, RecordMindsetCommand, RecordMindsetHandler, UpdateStatementCommand,
    UpdateStatementHandler,
};
pub use suggestion::{
    SuggestProsConsCommand, SuggestProsConsError, SuggestProsConsHandler, SuggestProsConsResult,
    SuggestionSettings, SuggestionSource,
};
