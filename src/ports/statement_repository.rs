//! Statement repository port.
//!
//! Statements are stored as loosely-typed [`StatementRecord`]s: option, kind
//! and provenance are free strings and importance is a signed integer. Readers
//! must validate records before trusting them.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::decision::StatementRecord;
use crate::domain::foundation::{DecisionId, StatementId};

/// Repository port for pros/cons statement records.
#[async_trait]
pub trait StatementRepository: Send + Sync {
    /// Save a new record.
    async fn save(&self, record: &StatementRecord) -> Result<(), RepositoryError>;

    /// Save a batch of new records, all or none.
    ///
    /// # Errors
    ///
    /// - `Storage` if any ID already exists or repeats within the batch;
    ///   nothing is written in that case
    async fn save_all(&self, records: &[StatementRecord]) -> Result<(), RepositoryError>;

    /// Replace an existing record.
    ///
    /// # Errors
    ///
    /// - `StatementNotFound` if no record has this ID
    async fn update(&self, record: &StatementRecord) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: &StatementId)
        -> Result<Option<StatementRecord>, RepositoryError>;

    /// All records of a decision, ordered by created_at ascending.
    async fn list_by_decision(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<StatementRecord>, RepositoryError>;

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// - `StatementNotFound` if no record has this ID
    async fn delete(&self, id: &StatementId) -> Result<(), RepositoryError>;
}
