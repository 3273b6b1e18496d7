//! Decision Scorer - Turns rated pros/cons into a recommendation.
//!
//! # Algorithm
//!
//! One pass over the statements:
//!
//! 1. `scores[option] += importance` for every statement, pros and cons alike.
//!    A score measures how much weight was placed on anything said about an
//!    option, not its net favorability.
//! 2. Statements with `importance >= high_importance_threshold` feed the
//!    leaning counters: a pro adds one to `practical`, a con adds one to
//!    `emotional`. This is a labeling heuristic (heavy cons read as emotional
//!    friction, heavy pros as practical drivers), not a factual claim.
//! 3. The option with the strictly higher score is recommended. On a tie the
//!    caller's preference decides, and without one the result is Option A.
//! 4. The leaning is whichever counter is larger, or `Balanced`.
//! 5. Reasoning text is produced by a [`ReasoningTemplate`].
//!
//! The result depends only on the multiset of statements, never on their
//! order. The scorer holds no mutable state and is safe to share.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::reasoning::{ReasoningContext, ReasoningTemplate, StandardReasoning};
use crate::domain::decision::{Mindset, OptionSide, Statement, StatementRecord};
use crate::domain::foundation::ValidationError;

/// Default importance at or above which a statement counts toward the leaning.
pub const DEFAULT_HIGH_IMPORTANCE_THRESHOLD: u32 = 7;

/// Summed importance per option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub option_a: u64,
    pub option_b: u64,
}

impl Scores {
    /// Returns the score of one side.
    pub fn of(&self, side: OptionSide) -> u64 {
        match side {
            OptionSide::A => self.option_a,
            OptionSide::B => self.option_b,
        }
    }

    /// Returns the strictly higher-scoring side, or None on a tie.
    pub fn leader(&self) -> Option<OptionSide> {
        match self.option_a.cmp(&self.option_b) {
            Ordering::Greater => Some(OptionSide::A),
            Ordering::Less => Some(OptionSide::B),
            Ordering::Equal => None,
        }
    }

    fn add(&mut self, side: OptionSide, amount: u32) {
        let slot = match side {
            OptionSide::A => &mut self.option_a,
            OptionSide::B => &mut self.option_b,
        };
        *slot = slot.saturating_add(u64::from(amount));
    }
}

/// What kind of reasoning weighed most heavily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leaning {
    Emotional,
    Practical,
    Balanced,
}

impl Leaning {
    pub fn label(&self) -> &'static str {
        match self {
            Leaning::Emotional => "Emotional",
            Leaning::Practical => "Practical",
            Leaning::Balanced => "Balanced",
        }
    }

    fn from_weights(weights: &LeaningWeights) -> Self {
        match weights.emotional.cmp(&weights.practical) {
            Ordering::Greater => Leaning::Emotional,
            Ordering::Less => Leaning::Practical,
            Ordering::Equal => Leaning::Balanced,
        }
    }
}

impl fmt::Display for Leaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw leaning counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaningWeights {
    pub practical: u32,
    pub emotional: u32,
}

/// How the recommended option was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// One option scored strictly higher.
    ScoreMajority,
    /// Scores tied and no preference was given; Option A by default.
    TieDefault,
    /// Scores tied and the user's preference broke the tie.
    TieBreakPreference,
    /// The user's preference replaced a different score-based winner.
    PreferenceOverride,
}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// Importance at or above which a statement feeds the leaning counters.
    pub high_importance_threshold: u32,
    /// When true, a supplied preference wins even if scores are not tied.
    pub tie_break_overrides_score: bool,
}

impl ScoringOptions {
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.high_importance_threshold = threshold;
        self
    }

    pub fn with_preference_override(mut self, enabled: bool) -> Self {
        self.tie_break_overrides_score = enabled;
        self
    }
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            high_importance_threshold: DEFAULT_HIGH_IMPORTANCE_THRESHOLD,
            tie_break_overrides_score: false,
        }
    }
}

/// Output of one scoring call. Derived entirely from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionScoringResult {
    pub recommended_option: OptionSide,
    pub scores: Scores,
    pub leaning: Leaning,
    pub weights: LeaningWeights,
    pub resolution: Resolution,
    pub reasoning: String,
}

/// Deterministic decision scoring engine.
#[derive(Clone)]
pub struct DecisionScorer {
    options: ScoringOptions,
    reasoning: Arc<dyn ReasoningTemplate>,
}

impl fmt::Debug for DecisionScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionScorer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for DecisionScorer {
    fn default() -> Self {
        Self::new(ScoringOptions::default())
    }
}

impl DecisionScorer {
    /// Creates a scorer with the standard reasoning template.
    pub fn new(options: ScoringOptions) -> Self {
        Self {
            options,
            reasoning: Arc::new(StandardReasoning),
        }
    }

    /// Replaces the reasoning template.
    pub fn with_reasoning(mut self, template: Arc<dyn ReasoningTemplate>) -> Self {
        self.reasoning = template;
        self
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Scores validated statements.
    ///
    /// # Edge Cases
    /// - Empty input: both scores 0, tie resolved as usual (Option A without a preference)
    /// - `tie_break` only matters on an exact tie unless `tie_break_overrides_score` is set
    pub fn score(
        &self,
        statements: &[Statement],
        tie_break: Option<OptionSide>,
    ) -> DecisionScoringResult {
        self.score_with_mindset(statements, tie_break, None)
    }

    /// Scores validated statements, optionally adding mindset weights to the
    /// leaning counters. The mindset never affects scores or the winner.
    pub fn score_with_mindset(
        &self,
        statements: &[Statement],
        tie_break: Option<OptionSide>,
        mindset: Option<&Mindset>,
    ) -> DecisionScoringResult {
        let mut scores = Scores::default();
        let mut weights = LeaningWeights::default();

        for statement in statements {
            let importance = statement.importance().value();
            scores.add(statement.option(), importance);

            if importance >= self.options.high_importance_threshold {
                if statement.is_pro() {
                    weights.practical += 1;
                } else {
                    weights.emotional += 1;
                }
            }
        }

        if let Some(mindset) = mindset {
            weights.practical += mindset.practical_weight();
            weights.emotional += mindset.emotional_weight();
        }

        let (recommended_option, resolution) = self.resolve(&scores, tie_break);
        let leaning = Leaning::from_weights(&weights);

        let context = ReasoningContext {
            winner: recommended_option,
            leaning,
            scores,
            resolution,
            preference: tie_break,
            top_pro: top_statement(statements, recommended_option, Statement::is_pro),
            top_con: top_statement(statements, recommended_option, Statement::is_con),
            statement_count: statements.len(),
        };
        let reasoning = self.reasoning.compose(&context);

        DecisionScoringResult {
            recommended_option,
            scores,
            leaning,
            weights,
            resolution,
            reasoning,
        }
    }

    /// Validates storage records and scores them.
    ///
    /// Every record is validated before any scoring happens; one malformed
    /// record aborts the whole call.
    pub fn score_records(
        &self,
        records: &[StatementRecord],
        tie_break: Option<OptionSide>,
        mindset: Option<&Mindset>,
    ) -> Result<DecisionScoringResult, ValidationError> {
        let statements = records
            .iter()
            .map(Statement::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.score_with_mindset(&statements, tie_break, mindset))
    }

    fn resolve(
        &self,
        scores: &Scores,
        tie_break: Option<OptionSide>,
    ) -> (OptionSide, Resolution) {
        match (scores.leader(), tie_break) {
            (Some(leader), Some(preferred))
                if self.options.tie_break_overrides_score && preferred != leader =>
            {
                (preferred, Resolution::PreferenceOverride)
            }
            (Some(leader), _) => (leader, Resolution::ScoreMajority),
            (None, Some(preferred)) => (preferred, Resolution::TieBreakPreference),
            (None, None) => (OptionSide::A, Resolution::TieDefault),
        }
    }
}

/// Highest-importance matching statement for a side.
///
/// Equal importance resolves to the lexicographically smallest text so the
/// choice does not depend on input order.
fn top_statement(
    statements: &[Statement],
    side: OptionSide,
    matches: fn(&Statement) -> bool,
) -> Option<&Statement> {
    statements
        .iter()
        .filter(|s| s.option() == side && matches(*s))
        .max_by(|a, b| {
            a.importance()
                .cmp(&b.importance())
                .then_with(|| b.text().cmp(a.text()))
        })
}
