//! Suggestion module - Validated AI-suggested pros/cons and the prompt that requests them.

mod prompt;
mod suggested;

pub use prompt::{suggestion_prompt, SUGGESTIONS_PER_LIST, SUGGESTION_SYSTEM_PROMPT};
pub use suggested::{
    SuggestedProsCons, SuggestedSide, SuggestionError, FALLBACK_ENTRIES_PER_LIST,
};
