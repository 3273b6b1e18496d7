//! Mindset self-assessment recorded alongside a decision.
//!
//! A mindset only influences the emotional/practical leaning, and only when a
//! caller asks for mindset weighting explicitly. It never changes option
//! scores or the recommended option.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, Timestamp};

/// How clear the user feels about the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClarityLevel {
    Clear,
    Confused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FearOfRegret {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionalAttachment {
    Strong,
    Moderate,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LongTermThinking {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PracticalApproach {
    Always,
    Sometimes,
    Rarely,
}

/// Weight added to the emotional counter for a strong attachment.
pub const STRONG_ATTACHMENT_WEIGHT: u32 = 2;
/// Weight added to the emotional counter for a high fear of regret.
pub const HIGH_REGRET_WEIGHT: u32 = 1;
/// Weight added to the practical counter for long-term thinking.
pub const LONG_TERM_WEIGHT: u32 = 2;
/// Weight added to the practical counter for an always-practical approach.
pub const ALWAYS_PRACTICAL_WEIGHT: u32 = 1;

/// Answers to the mindset questionnaire. Every answer is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mindset {
    pub decision_id: DecisionId,
    #[serde(default)]
    pub clarity_level: Option<ClarityLevel>,
    #[serde(default)]
    pub fear_of_regret: Option<FearOfRegret>,
    #[serde(default)]
    pub emotional_attachment: Option<EmotionalAttachment>,
    #[serde(default)]
    pub long_term_thinking: Option<LongTermThinking>,
    #[serde(default)]
    pub practical_approach: Option<PracticalApproach>,
    #[serde(default)]
    pub notes: Option<String>,
    pub recorded_at: Timestamp,
}

impl Mindset {
    /// Creates an empty mindset for a decision.
    pub fn new(decision_id: DecisionId) -> Self {
        Self {
            decision_id,
            clarity_level: None,
            fear_of_regret: None,
            emotional_attachment: None,
            long_term_thinking: None,
            practical_approach: None,
            notes: None,
            recorded_at: Timestamp::now(),
        }
    }

    pub fn with_fear_of_regret(mut self, value: FearOfRegret) -> Self {
        self.fear_of_regret = Some(value);
        self
    }

    pub fn with_emotional_attachment(mut self, value: EmotionalAttachment) -> Self {
        self.emotional_attachment = Some(value);
        self
    }

    pub fn with_long_term_thinking(mut self, value: LongTermThinking) -> Self {
        self.long_term_thinking = Some(value);
        self
    }

    pub fn with_practical_approach(mut self, value: PracticalApproach) -> Self {
        self.practical_approach = Some(value);
        self
    }

    /// Contribution to the emotional counter.
    pub fn emotional_weight(&self) -> u32 {
        let mut weight = 0;
        if self.emotional_attachment == Some(EmotionalAttachment::Strong) {
            weight += STRONG_ATTACHMENT_WEIGHT;
        }
        if self.fear_of_regret == Some(FearOfRegret::High) {
            weight += HIGH_REGRET_WEIGHT;
        }
        weight
    }

    /// Contribution to the practical counter.
    pub fn practical_weight(&self) -> u32 {
        let mut weight = 0;
        if self.long_term_thinking == Some(LongTermThinking::Yes) {
            weight += LONG_TERM_WEIGHT;
        }
        if self.practical_approach == Some(PracticalApproach::Always) {
            weight += ALWAYS_PRACTICAL_WEIGHT;
        }
        weight
    }
}
