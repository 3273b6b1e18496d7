//! Mindset repository port. One mindset per decision; saving replaces.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::decision::Mindset;
use crate::domain::foundation::DecisionId;

#[async_trait]
pub trait MindsetRepository: Send + Sync {
    /// Save the mindset for its decision, replacing any previous answers.
    async fn save(&self, mindset: &Mindset) -> Result<(), RepositoryError>;

    async fn find_by_decision(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Option<Mindset>, RepositoryError>;
}
