//! Decision handlers - Decisions, their statements and mindset answers.

mod add_statement;
mod create_decision;
mod delete_statement;
mod error;
mod get_decision;
mod get_mindset;
mod list_statements;
mod record_mindset;
mod update_statement;

pub use add_statement::{AddStatementCommand, AddStatementHandler};
pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler};
pub use delete_statement::{DeleteStatementCommand, DeleteStatementHandler};
pub use error::DecisionCommandError;
pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use get_mindset::{GetMindsetHandler, GetMindsetQuery};
pub use list_statements::{ListStatementsHandler, ListStatementsQuery};
pub use record_mindset::{RecordMindsetCommand, RecordMindsetHandler};
pub use update_statement::{UpdateStatementCommand, UpdateStatementHandler};
