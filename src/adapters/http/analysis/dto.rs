//! Query parameters and response body for the analysis endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{DecisionScoringResult, Resolution, Scores};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParams {
    /// "A", "B", "Option A" or "Option B".
    #[serde(default)]
    pub user_preference: Option<String>,
    #[serde(default)]
    pub use_mindset: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// "Option A" or "Option B".
    pub recommended_option: String,
    /// "Emotional", "Practical" or "Balanced".
    pub emotional_vs_practical: String,
    pub reasoning: String,
    pub scores: Scores,
    pub resolution: Resolution,
}

impl From<DecisionScoringResult> for AnalysisResponse {
    fn from(result: DecisionScoringResult) -> Self {
        Self {
            recommended_option: result.recommended_option.label().to_string(),
            emotional_vs_practical: result.leaning.label().to_string(),
            reasoning: result.reasoning,
            scores: result.scores,
            resolution: result.resolution,
        }
    }
}
