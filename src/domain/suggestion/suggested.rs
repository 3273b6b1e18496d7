//! Strict shape of AI-suggested pros and cons.
//!
//! Language-model output is untrusted text. It is parsed into
//! [`SuggestedProsCons`] and validated immediately; anything that does not
//! fit is rejected so the caller can fall back to generic content.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::decision::{
    Importance, OptionSide, Provenance, Statement, StatementKind,
};
use crate::domain::foundation::{DecisionId, ValidationError};

/// Number of generic entries per list in the fallback suggestion.
pub const FALLBACK_ENTRIES_PER_LIST: usize = 3;

/// Pros and cons suggested for one option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedSide {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl SuggestedSide {
    fn is_empty(&self) -> bool {
        self.pros.is_empty() && self.cons.is_empty()
    }
}

/// Suggested pros and cons for both options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedProsCons {
    #[serde(rename = "optionA")]
    pub option_a: SuggestedSide,
    #[serde(rename = "optionB")]
    pub option_b: SuggestedSide,
}

/// Reasons a suggestion payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("malformed suggestion payload: {0}")]
    Malformed(String),

    #[error("{side} has no pros or cons")]
    EmptySide { side: OptionSide },

    #[error("{side} has a blank {kind} entry")]
    BlankEntry { side: OptionSide, kind: &'static str },
}

impl SuggestedProsCons {
    /// Parses and validates a model response.
    ///
    /// Accepts a bare JSON object, one wrapped in markdown code fences, or one
    /// surrounded by prose (everything between the first `{` and the last `}`).
    pub fn parse(raw: &str) -> Result<Self, SuggestionError> {
        let start = raw.find('{').ok_or(SuggestionError::NoJsonObject)?;
        let end = raw.rfind('}').ok_or(SuggestionError::NoJsonObject)?;
        if end < start {
            return Err(SuggestionError::NoJsonObject);
        }

        let parsed: SuggestedProsCons = serde_json::from_str(&raw[start..=end])
            .map_err(|e| SuggestionError::Malformed(e.to_string()))?;

        parsed.validated()
    }

    /// Trims every entry and checks the shape invariants.
    pub fn validated(mut self) -> Result<Self, SuggestionError> {
        for (side, suggested) in [
            (OptionSide::A, &mut self.option_a),
            (OptionSide::B, &mut self.option_b),
        ] {
            if suggested.is_empty() {
                return Err(SuggestionError::EmptySide { side });
            }
            for (kind, entries) in [("pro", &mut suggested.pros), ("con", &mut suggested.cons)] {
                for entry in entries.iter_mut() {
                    let trimmed = entry.trim();
                    if trimmed.is_empty() {
                        return Err(SuggestionError::BlankEntry { side, kind });
                    }
                    *entry = trimmed.to_string();
                }
            }
        }
        Ok(self)
    }

    /// Generic placeholder content used when the provider fails.
    pub fn fallback() -> Self {
        Self {
            option_a: fallback_side(OptionSide::A),
            option_b: fallback_side(OptionSide::B),
        }
    }

    pub fn side(&self, side: OptionSide) -> &SuggestedSide {
        match side {
            OptionSide::A => &self.option_a,
            OptionSide::B => &self.option_b,
        }
    }

    /// Total number of suggested entries.
    pub fn len(&self) -> usize {
        [&self.option_a, &self.option_b]
            .iter()
            .map(|s| s.pros.len() + s.cons.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts the suggestions into AI-provenance statements with a uniform importance.
    pub fn to_statements(
        &self,
        decision_id: DecisionId,
        importance: Importance,
    ) -> Result<Vec<Statement>, ValidationError> {
        let mut statements = Vec::with_capacity(self.len());
        for side in [OptionSide::A, OptionSide::B] {
            let suggested = self.side(side);
            for (kind, entries) in [
                (StatementKind::Pro, &suggested.pros),
                (StatementKind::Con, &suggested.cons),
            ] {
                for text in entries {
                    statements.push(Statement::new(
                        decision_id,
                        side,
                        kind,
                        text.clone(),
                        importance,
                        Provenance::Ai,
                    )?);
                }
            }
        }
        Ok(statements)
    }
}

fn fallback_side(side: OptionSide) -> SuggestedSide {
    SuggestedSide {
        pros: (1..=FALLBACK_ENTRIES_PER_LIST)
            .map(|n| format!("Potential benefit {} for {}", n, side))
            .collect(),
        cons: (1..=FALLBACK_ENTRIES_PER_LIST)
            .map(|n| format!("Potential drawback {} for {}", n, side))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "optionA": { "pros": ["Higher salary"], "cons": ["Longer hours", "New city"] },
        "optionB": { "pros": ["Stable team"], "cons": [] }
    }"#;

    #[test]
    fn parse_accepts_bare_object() {
        let parsed = SuggestedProsCons::parse(VALID).unwrap();
        assert_eq!(parsed.option_a.cons.len(), 2);
        assert_eq!(parsed.option_b.pros, vec!["Stable team".to_string()]);
    }

    #[test]
    fn parse_accepts_fenced_object_with_prose() {
        let raw = format!("Here you go:\n```json\n{}\n```\nGood luck!", VALID);
        let parsed = SuggestedProsCons::parse(&raw).unwrap();
        assert_eq!(parsed.len(), 5);
    }

    #[test]
    fn parse_rejects_text_without_json() {
        assert_eq!(
            SuggestedProsCons::parse("I cannot help with that."),
            Err(SuggestionError::NoJsonObject)
        );
    }

    #[test]
    fn parse_rejects_missing_option() {
        let raw = r#"{ "optionA": { "pros": ["x"], "cons": [] } }"#;
        assert!(matches!(
            SuggestedProsCons::parse(raw),
            Err(SuggestionError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_non_string_entries() {
        let raw = r#"{
            "optionA": { "pros": [1, 2], "cons": [] },
            "optionB": { "pros": ["y"], "cons": [] }
        }"#;
        assert!(matches!(
            SuggestedProsCons::parse(raw),
            Err(SuggestionError::Malformed(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_side() {
        let raw = r#"{
            "optionA": { "pros": ["x"], "cons": [] },
            "optionB": { "pros": [], "cons": [] }
        }"#;
        assert_eq!(
            SuggestedProsCons::parse(raw),
            Err(SuggestionError::EmptySide { side: OptionSide::B })
        );
    }

    #[test]
    fn parse_rejects_blank_entries_and_trims_others() {
        let raw = r#"{
            "optionA": { "pros": ["  padded  "], "cons": ["  "] },
            "optionB": { "pros": ["y"], "cons": [] }
        }"#;
        assert_eq!(
            SuggestedProsCons::parse(raw),
            Err(SuggestionError::BlankEntry { side: OptionSide::A, kind: "con" })
        );

        let ok = r#"{
            "optionA": { "pros": ["  padded  "], "cons": [] },
            "optionB": { "pros": ["y"], "cons": [] }
        }"#;
        assert_eq!(SuggestedProsCons::parse(ok).unwrap().option_a.pros[0], "padded");
    }

    #[test]
    fn fallback_has_three_generic_entries_per_list() {
        let fallback = SuggestedProsCons::fallback();
        assert_eq!(fallback.len(), 12);
        assert_eq!(fallback.option_a.pros[0], "Potential benefit 1 for Option A");
        assert_eq!(fallback.option_b.cons[2], "Potential drawback 3 for Option B");
        assert!(fallback.clone().validated().is_ok());
    }

    #[test]
    fn to_statements_marks_ai_provenance() {
        let decision_id = DecisionId::new();
        let statements = SuggestedProsCons::parse(VALID)
            .unwrap()
            .to_statements(decision_id, Importance::new(3))
            .unwrap();

        assert_eq!(statements.len(), 5);
        assert!(statements.iter().all(|s| s.provenance() == Provenance::Ai));
        assert!(statements.iter().all(|s| s.decision_id() == decision_id));
        assert_eq!(
            statements
                .iter()
                .filter(|s| s.option() == OptionSide::A && s.is_con())
                .count(),
            2
        );
    }
}
