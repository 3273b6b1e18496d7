//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `DecisionRepository` - Decisions and their option titles
//! - `StatementRepository` - Rated pros/cons records
//! - `MindsetRepository` - Mindset questionnaire answers
//!
//! ## AI Ports
//!
//! - `AIProvider` - Completion requests to a language model

mod ai_provider;
mod decision_repository;
mod mindset_repository;
mod repository_error;
mod statement_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use decision_repository::DecisionRepository;
pub use mindset_repository::MindsetRepository;
pub use repository_error::RepositoryError;
pub use statement_repository::StatementRepository;
