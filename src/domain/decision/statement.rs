//! Pro/con statements and their storage records.
//!
//! A [`Statement`] is the validated form the scoring engine consumes. A
//! [`StatementRecord`] is the loosely-typed shape a record store hands back,
//! with the option/kind/provenance labels kept as plain strings. Converting a
//! record into a statement is the single validation gate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DecisionId, StatementId, Timestamp, ValidationError};

/// Which of the two options a statement is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    A,
    B,
}

impl OptionSide {
    /// Returns the short code ("A" or "B").
    pub fn code(&self) -> &'static str {
        match self {
            OptionSide::A => "A",
            OptionSide::B => "B",
        }
    }

    /// Returns the display label ("Option A" or "Option B").
    pub fn label(&self) -> &'static str {
        match self {
            OptionSide::A => "Option A",
            OptionSide::B => "Option B",
        }
    }

    /// Exact storage code: "A" or "B" only.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code {
            "A" => Ok(OptionSide::A),
            "B" => Ok(OptionSide::B),
            other => Err(ValidationError::invalid_format(
                "option",
                format!("expected 'A' or 'B', got '{}'", other),
            )),
        }
    }

    /// Returns the opposite side.
    pub fn other(&self) -> Self {
        match self {
            OptionSide::A => OptionSide::B,
            OptionSide::B => OptionSide::A,
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OptionSide {
    type Err = ValidationError;

    /// Lenient input form: trims and also accepts the "Option A"/"Option B" labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Option A" => Ok(OptionSide::A),
            "Option B" => Ok(OptionSide::B),
            other => Self::from_code(other),
        }
    }
}

/// Whether a statement argues for or against its option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Pro,
    Con,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Pro => "pro",
            StatementKind::Con => "con",
        }
    }

    /// Exact storage code: "pro" or "con" only.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code {
            "pro" => Ok(StatementKind::Pro),
            "con" => Ok(StatementKind::Con),
            other => Err(ValidationError::invalid_format(
                "kind",
                format!("expected 'pro' or 'con', got '{}'", other),
            )),
        }
    }
}

impl FromStr for StatementKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim())
    }
}

/// Who wrote a statement. Informational only; never affects scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    #[default]
    User,
    Ai,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::User => "user",
            Provenance::Ai => "ai",
        }
    }

    /// Exact storage code: "user" or "ai" only.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code {
            "user" => Ok(Provenance::User),
            "ai" => Ok(Provenance::Ai),
            other => Err(ValidationError::invalid_format(
                "source",
                format!("expected 'user' or 'ai', got '{}'", other),
            )),
        }
    }
}

impl FromStr for Provenance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim())
    }
}

/// Non-negative importance weight.
///
/// Input forms use 1-5, other producers use 1-10; no upper bound is assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Importance(u32);

impl Importance {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates an Importance from a signed value, rejecting negatives.
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::out_of_range("importance", 0, i64::from(u32::MAX), value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single rated pro or con belonging to one decision and one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    id: StatementId,
    decision_id: DecisionId,
    option: OptionSide,
    kind: StatementKind,
    text: String,
    importance: Importance,
    provenance: Provenance,
    created_at: Timestamp,
}

impl Statement {
    /// Creates a new statement with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if `text` is blank.
    pub fn new(
        decision_id: DecisionId,
        option: OptionSide,
        kind: StatementKind,
        text: impl Into<String>,
        importance: Importance,
        provenance: Provenance,
    ) -> Result<Self, ValidationError> {
        let text = validate_text(text.into())?;
        Ok(Self {
            id: StatementId::new(),
            decision_id,
            option,
            kind,
            text,
            importance,
            provenance,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> StatementId {
        self.id
    }

    pub fn decision_id(&self) -> DecisionId {
        self.decision_id
    }

    pub fn option(&self) -> OptionSide {
        self.option
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn importance(&self) -> Importance {
        self.importance
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn is_pro(&self) -> bool {
        self.kind == StatementKind::Pro
    }

    pub fn is_con(&self) -> bool {
        self.kind == StatementKind::Con
    }

    /// Replaces the statement text.
    pub fn update_text(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        self.text = validate_text(text.into())?;
        Ok(())
    }

    /// Replaces the importance weight.
    pub fn update_importance(&mut self, importance: Importance) {
        self.importance = importance;
    }
}

fn validate_text(text: String) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("text"));
    }
    Ok(trimmed.to_string())
}

/// Storage shape of a statement.
///
/// Labels are kept as the raw strings the store holds, so a corrupted or
/// foreign record survives until it is converted back into a [`Statement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub id: StatementId,
    pub decision_id: DecisionId,
    pub option: String,
    pub kind: String,
    pub text: String,
    pub importance: i64,
    pub provenance: String,
    pub created_at: Timestamp,
}

impl From<&Statement> for StatementRecord {
    fn from(statement: &Statement) -> Self {
        Self {
            id: statement.id,
            decision_id: statement.decision_id,
            option: statement.option.code().to_string(),
            kind: statement.kind.as_str().to_string(),
            text: statement.text.clone(),
            importance: i64::from(statement.importance.value()),
            provenance: statement.provenance.as_str().to_string(),
            created_at: statement.created_at,
        }
    }
}

impl TryFrom<&StatementRecord> for Statement {
    type Error = ValidationError;

    fn try_from(record: &StatementRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            decision_id: record.decision_id,
            option: OptionSide::from_code(&record.option)?,
            kind: StatementKind::from_code(&record.kind)?,
            text: validate_text(record.text.clone())?,
            importance: Importance::try_from_i64(record.importance)?,
            provenance: Provenance::from_code(&record.provenance)?,
            created_at: record.created_at,
        })
    }
}
