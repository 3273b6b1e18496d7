//! Analysis Module - Pure decision scoring.
//!
//! # Components
//!
//! - `DecisionScorer` - Score sums, leaning classification, recommendation
//! - `ReasoningTemplate` - Pluggable justification text (`StandardReasoning` by default)
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod decision_scorer;
mod reasoning;

pub use decision_scorer::{
    DecisionScorer, DecisionScoringResult, Leaning, LeaningWeights, Resolution, Scores,
    ScoringOptions, DEFAULT_HIGH_IMPORTANCE_THRESHOLD,
};
pub use reasoning::{ReasoningContext, ReasoningTemplate, StandardReasoning};
