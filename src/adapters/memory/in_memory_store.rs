//! In-Memory Store Adapter
//!
//! Holds decisions, statement records and mindsets in memory.
//! Backs the HTTP server and the integration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::{Decision, Mindset, StatementRecord};
use crate::domain::foundation::{DecisionId, StatementId};
use crate::ports::{DecisionRepository, MindsetRepository, RepositoryError, StatementRepository};

/// In-memory storage for every repository port.
///
/// Statement records are kept in insertion order, which is also their
/// `created_at` order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    decisions: Arc<RwLock<HashMap<DecisionId, Decision>>>,
    statements: Arc<RwLock<Vec<StatementRecord>>>,
    mindsets: Arc<RwLock<HashMap<DecisionId, Mindset>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.decisions.write().await.clear();
        self.statements.write().await.clear();
        self.mindsets.write().await.clear();
    }

    pub async fn decision_count(&self) -> usize {
        self.decisions.read().await.len()
    }

    pub async fn statement_count(&self) -> usize {
        self.statements.read().await.len()
    }
}

#[async_trait]
impl DecisionRepository for InMemoryStore {
    async fn save(&self, decision: &Decision) -> Result<(), RepositoryError> {
        self.decisions
            .write()
            .await
            .insert(decision.id(), decision.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, RepositoryError> {
        Ok(self.decisions.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &DecisionId) -> Result<bool, RepositoryError> {
        Ok(self.decisions.read().await.contains_key(id))
    }
}

#[async_trait]
impl StatementRepository for InMemoryStore {
    async fn save(&self, record: &StatementRecord) -> Result<(), RepositoryError> {
        let mut statements = self.statements.write().await;
        if statements.iter().any(|r| r.id == record.id) {
            return Err(RepositoryError::storage(format!(
                "statement {} already exists",
                record.id
            )));
        }
        statements.push(record.clone());
        Ok(())
    }

    async fn save_all(&self, records: &[StatementRecord]) -> Result<(), RepositoryError> {
        let mut statements = self.statements.write().await;
        for (index, record) in records.iter().enumerate() {
            let clashes = statements.iter().any(|r| r.id == record.id)
                || records[..index].iter().any(|r| r.id == record.id);
            if clashes {
                return Err(RepositoryError::storage(format!(
                    "statement {} already exists",
                    record.id
                )));
            }
        }
        statements.extend_from_slice(records);
        Ok(())
    }

    async fn update(&self, record: &StatementRecord) -> Result<(), RepositoryError> {
        let mut statements = self.statements.write().await;
        let slot = statements
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(RepositoryError::StatementNotFound(record.id))?;
        *slot = record.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &StatementId,
    ) -> Result<Option<StatementRecord>, RepositoryError> {
        Ok(self
            .statements
            .read()
            .await
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn list_by_decision(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<StatementRecord>, RepositoryError> {
        Ok(self
            .statements
            .read()
            .await
            .iter()
            .filter(|r| r.decision_id == *decision_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &StatementId) -> Result<(), RepositoryError> {
        let mut statements = self.statements.write().await;
        let before = statements.len();
        statements.retain(|r| r.id != *id);
        if statements.len() == before {
            return Err(RepositoryError::StatementNotFound(*id));
        }
        Ok(())
    }
}

#[async_trait]
impl MindsetRepository for InMemoryStore {
    async fn save(&self, mindset: &Mindset) -> Result<(), RepositoryError> {
        self.mindsets
            .write()
            .await
            .insert(mindset.decision_id, mindset.clone());
        Ok(())
    }

    async fn find_by_decision(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Option<Mindset>, RepositoryError> {
        Ok(self.mindsets.read().await.get(decision_id).cloned())
    }
}
