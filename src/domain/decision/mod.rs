//! Decision module - The two options, their rated pros/cons, and the
//! user's mindset self-assessment.

mod aggregate;
mod mindset;
mod statement;

pub use aggregate::Decision;
pub use mindset::{
    ClarityLevel, EmotionalAttachment, FearOfRegret, LongTermThinking, Mindset,
    PracticalApproach,
};
pub use statement::{
    Importance, OptionSide, Provenance, Statement, StatementKind, StatementRecord,
};
