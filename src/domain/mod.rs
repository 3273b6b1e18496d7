//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `decision` - Decisions, rated pros/cons statements, mindset answers
//! - `analysis` - Pure decision scoring and reasoning text
//! - `suggestion` - Strict shape for AI-suggested pros/cons

pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod suggestion;
