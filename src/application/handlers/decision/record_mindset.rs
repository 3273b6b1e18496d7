//! RecordMindsetHandler - Command handler for saving mindset questionnaire answers.

use std::sync::Arc;

use crate::domain::decision::{
    ClarityLevel, EmotionalAttachment, FearOfRegret, LongTermThinking, Mindset, PracticalApproach,
};
use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, MindsetRepository};

use super::DecisionCommandError;

/// Answers to record. Recording replaces any previous answers for the decision.
#[derive(Debug, Clone, Default)]
pub struct RecordMindsetCommand {
    pub decision_id: DecisionId,
    pub clarity_level: Option<ClarityLevel>,
    pub fear_of_regret: Option<FearOfRegret>,
    pub emotional_attachment: Option<EmotionalAttachment>,
    pub long_term_thinking: Option<LongTermThinking>,
    pub practical_approach: Option<PracticalApproach>,
    pub notes: Option<String>,
}

pub struct RecordMindsetHandler {
    decisions: Arc<dyn DecisionRepository>,
    mindsets: Arc<dyn MindsetRepository>,
}

impl RecordMindsetHandler {
    pub fn new(
        decisions: Arc<dyn DecisionRepository>,
        mindsets: Arc<dyn MindsetRepository>,
    ) -> Self {
        Self {
            decisions,
            mindsets,
        }
    }

    pub async fn handle(&self, cmd: RecordMindsetCommand) -> Result<Mindset, DecisionCommandError> {
        if !self.decisions.exists(&cmd.decision_id).await? {
            return Err(DecisionCommandError::DecisionNotFound(cmd.decision_id));
        }

        let mut mindset = Mindset::new(cmd.decision_id);
        mindset.clarity_level = cmd.clarity_level;
        mindset.fear_of_regret = cmd.fear_of_regret;
        mindset.emotional_attachment = cmd.emotional_attachment;
        mindset.long_term_thinking = cmd.long_term_thinking;
        mindset.practical_approach = cmd.practical_approach;
        mindset.notes = cmd
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        self.mindsets.save(&mindset).await?;

        tracing::debug!(decision_id = %cmd.decision_id, "mindset recorded");
        Ok(mindset)
    }
}
