//! Scoring engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{ScoringOptions, DEFAULT_HIGH_IMPORTANCE_THRESHOLD};

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Importance at or above which a statement is practical
    #[serde(default = "default_threshold")]
    pub high_importance_threshold: u32,

    /// Let a stated preference override a non-tied score
    #[serde(default)]
    pub tie_break_overrides_score: bool,

    /// Apply recorded mindset weights when the request does not say
    #[serde(default)]
    pub use_mindset_by_default: bool,
}

impl ScoringConfig {
    pub fn to_options(&self) -> ScoringOptions {
        ScoringOptions::default()
            .with_threshold(self.high_importance_threshold)
            .with_preference_override(self.tie_break_overrides_score)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.high_importance_threshold == 0 {
            return Err(ValidationError::InvalidThreshold);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_importance_threshold: default_threshold(),
            tie_break_overrides_score: false,
            use_mindset_by_default: false,
        }
    }
}

fn default_threshold() -> u32 {
    DEFAULT_HIGH_IMPORTANCE_THRESHOLD
}
