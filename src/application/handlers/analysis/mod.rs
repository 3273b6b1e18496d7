//! Analysis handlers - Scoring a decision's stored statements.

mod get_decision_analysis;

pub use get_decision_analysis::{
    AnalysisError, GetDecisionAnalysisHandler, GetDecisionAnalysisQuery,
};
