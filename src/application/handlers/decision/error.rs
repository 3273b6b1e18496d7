//! Error type shared by the decision command and query handlers.

use thiserror::Error;

use crate::domain::foundation::{DecisionId, StatementId, ValidationError};
use crate::ports::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionCommandError {
    #[error("decision not found: {0}")]
    DecisionNotFound(DecisionId),

    #[error("statement not found: {0}")]
    StatementNotFound(StatementId),

    #[error("no mindset recorded for decision {0}")]
    MindsetNotFound(DecisionId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for DecisionCommandError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DecisionNotFound(id) => DecisionCommandError::DecisionNotFound(id),
            RepositoryError::StatementNotFound(id) => DecisionCommandError::StatementNotFound(id),
            RepositoryError::Storage(msg) => DecisionCommandError::Storage(msg),
        }
    }
}
