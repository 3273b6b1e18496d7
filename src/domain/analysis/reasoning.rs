//! Reasoning templates - Short justification text for a scoring result.
//!
//! Wording is prose, not protocol. What every template must get into the
//! text: the winning option, the leaning category, and the winner's top
//! pro/con when they exist.

use super::decision_scorer::{Leaning, Resolution, Scores};
use crate::domain::decision::{OptionSide, Statement};

/// Inputs available to a template.
#[derive(Debug, Clone, Copy)]
pub struct ReasoningContext<'a> {
    pub winner: OptionSide,
    pub leaning: Leaning,
    pub scores: Scores,
    pub resolution: Resolution,
    pub preference: Option<OptionSide>,
    /// Highest-importance pro of the winning option.
    pub top_pro: Option<&'a Statement>,
    /// Highest-importance con of the winning option.
    pub top_con: Option<&'a Statement>,
    pub statement_count: usize,
}

/// Produces the justification paragraph for a result.
pub trait ReasoningTemplate: Send + Sync {
    fn compose(&self, context: &ReasoningContext<'_>) -> String;
}

/// Default English template.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReasoning;

impl StandardReasoning {
    fn outcome_sentence(context: &ReasoningContext<'_>) -> String {
        let winner = context.winner;
        let loser = winner.other();
        let (winning, losing) = (context.scores.of(winner), context.scores.of(loser));

        if context.statement_count == 0 {
            return match context.resolution {
                Resolution::TieBreakPreference | Resolution::PreferenceOverride => format!(
                    "No pros or cons have been recorded yet, so {} is suggested based on your preference.",
                    winner
                ),
                _ => format!(
                    "No pros or cons have been recorded yet, so {} is suggested by default.",
                    winner
                ),
            };
        }

        match context.resolution {
            Resolution::ScoreMajority => format!(
                "{} comes out ahead with a total weight of {} against {} for {}.",
                winner, winning, losing, loser
            ),
            Resolution::TieDefault => format!(
                "{} and {} are tied at {}, so {} is suggested by default.",
                OptionSide::A,
                OptionSide::B,
                winning,
                winner
            ),
            Resolution::TieBreakPreference => format!(
                "{} and {} are tied at {}; your preference for {} breaks the tie.",
                OptionSide::A,
                OptionSide::B,
                winning,
                winner
            ),
            Resolution::PreferenceOverride => format!(
                "{} is recommended because your preference takes priority, although {} scores higher ({} against {}).",
                winner, loser, losing, winning
            ),
        }
    }

    fn leaning_sentence(leaning: Leaning) -> &'static str {
        match leaning {
            Leaning::Emotional => {
                "Overall the decision leans Emotional: you seem emotionally connected to this choice, so make sure it still feels right in your heart."
            }
            Leaning::Practical => {
                "Overall the decision leans Practical: your pros and cons suggest a practical decision is better long-term."
            }
            Leaning::Balanced => {
                "Overall the decision is Balanced: your heart and mind are aligned on this choice."
            }
        }
    }
}

impl ReasoningTemplate for StandardReasoning {
    fn compose(&self, context: &ReasoningContext<'_>) -> String {
        let mut sentences = vec![Self::outcome_sentence(context)];

        if let Some(pro) = context.top_pro {
            sentences.push(format!(
                "Its strongest point is \"{}\" (importance {}).",
                pro.text(),
                pro.importance()
            ));
        }

        if let Some(con) = context.top_con {
            let lead = if context.top_pro.is_some() {
                "The main concern to weigh against it is"
            } else {
                "The main concern to weigh is"
            };
            sentences.push(format!(
                "{} \"{}\" (importance {}).",
                lead,
                con.text(),
                con.importance()
            ));
        }

        sentences.push(Self::leaning_sentence(context.leaning).to_string());
        sentences.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{Importance, Provenance, StatementKind};
    use crate::domain::foundation::DecisionId;

    fn statement(kind: StatementKind, text: &str, importance: u32) -> Statement {
        Statement::new(
            DecisionId::new(),
            OptionSide::B,
            kind,
            text,
            Importance::new(importance),
            Provenance::Ai,
        )
        .unwrap()
    }

    fn context<'a>(
        top_pro: Option<&'a Statement>,
        top_con: Option<&'a Statement>,
    ) -> ReasoningContext<'a> {
        ReasoningContext {
            winner: OptionSide::B,
            leaning: Leaning::Practical,
            scores: Scores { option_a: 3, option_b: 9 },
            resolution: Resolution::ScoreMajority,
            preference: None,
            top_pro,
            top_con,
            statement_count: 3,
        }
    }

    #[test]
    fn standard_reasoning_names_winner_leaning_and_citations() {
        let pro = statement(StatementKind::Pro, "Closer to family", 8);
        let con = statement(StatementKind::Con, "Lower salary", 1);
        let text = StandardReasoning.compose(&context(Some(&pro), Some(&con)));

        assert!(text.starts_with("Option B comes out ahead with a total weight of 9 against 3"));
        assert!(text.contains("\"Closer to family\" (importance 8)"));
        assert!(text.contains("\"Lower salary\" (importance 1)"));
        assert!(text.contains("Practical"));
    }

    #[test]
    fn standard_reasoning_without_citations_is_still_well_formed() {
        let text = StandardReasoning.compose(&context(None, None));
        assert!(!text.contains("strongest point"));
        assert!(!text.contains("main concern"));
        assert!(text.ends_with("better long-term."));
    }

    #[test]
    fn standard_reasoning_con_only_uses_standalone_phrasing() {
        let con = statement(StatementKind::Con, "Lower salary", 4);
        let text = StandardReasoning.compose(&context(None, Some(&con)));
        assert!(text.contains("The main concern to weigh is \"Lower salary\""));
    }

    #[test]
    fn standard_reasoning_mentions_override() {
        let mut ctx = context(None, None);
        ctx.winner = OptionSide::A;
        ctx.resolution = Resolution::PreferenceOverride;
        ctx.preference = Some(OptionSide::A);

        let text = StandardReasoning.compose(&ctx);
        assert!(text.starts_with("Option A is recommended because your preference takes priority"));
        assert!(text.contains("Option B scores higher (9 against 3)"));
    }

    #[test]
    fn empty_input_sentence_is_default() {
        let mut ctx = context(None, None);
        ctx.winner = OptionSide::A;
        ctx.leaning = Leaning::Balanced;
        ctx.resolution = Resolution::TieDefault;
        ctx.scores = Scores::default();
        ctx.statement_count = 0;

        let text = StandardReasoning.compose(&ctx);
        assert!(text.starts_with("No pros or cons have been recorded yet, so Option A"));
        assert!(text.contains("Balanced"));
    }

    #[test]
    fn empty_input_with_preference_credits_the_preference() {
        let mut ctx = context(None, None);
        ctx.leaning = Leaning::Balanced;
        ctx.resolution = Resolution::TieBreakPreference;
        ctx.preference = Some(OptionSide::B);
        ctx.scores = Scores::default();
        ctx.statement_count = 0;

        let text = StandardReasoning.compose(&ctx);
        assert!(text.starts_with(
            "No pros or cons have been recorded yet, so Option B is suggested based on your preference."
        ));
        assert!(!text.contains("by default"));
    }
}
