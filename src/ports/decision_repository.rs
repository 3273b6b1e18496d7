//! Decision repository port.
//!
//! Defines the contract for persisting and retrieving Decision aggregates.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::decision::Decision;
use crate::domain::foundation::DecisionId;

/// Repository port for Decision persistence.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Save a new decision.
    async fn save(&self, decision: &Decision) -> Result<(), RepositoryError>;

    /// Find a decision by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, RepositoryError>;

    async fn exists(&self, id: &DecisionId) -> Result<bool, RepositoryError>;
}
