//! Error type shared by the storage ports.

use thiserror::Error;

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, StatementId};

/// Errors returned by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("decision not found: {0}")]
    DecisionNotFound(DecisionId),

    #[error("statement not found: {0}")]
    StatementNotFound(StatementId),

    #[error("storage failure: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::DecisionNotFound(_) | RepositoryError::StatementNotFound(_)
        )
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        let code = match &err {
            RepositoryError::DecisionNotFound(_) => ErrorCode::DecisionNotFound,
            RepositoryError::StatementNotFound(_) => ErrorCode::StatementNotFound,
            RepositoryError::Storage(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}
