//! Decision aggregate: the two options being compared.

use serde::{Deserialize, Serialize};

use super::OptionSide;
use crate::domain::foundation::{DecisionId, Timestamp, ValidationError};

/// A choice between exactly two named options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    id: DecisionId,
    option_a: String,
    option_b: String,
    created_at: Timestamp,
}

impl Decision {
    /// Creates a new decision.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if either option title is blank.
    pub fn new(
        option_a: impl Into<String>,
        option_b: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: DecisionId::new(),
            option_a: validate_title("optionA", option_a.into())?,
            option_b: validate_title("optionB", option_b.into())?,
            created_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn option_a(&self) -> &str {
        &self.option_a
    }

    pub fn option_b(&self) -> &str {
        &self.option_b
    }

    /// Returns the title of the given side.
    pub fn title_of(&self, side: OptionSide) -> &str {
        match side {
            OptionSide::A => &self.option_a,
            OptionSide::B => &self.option_b,
        }
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

fn validate_title(field: &str, title: String) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}
