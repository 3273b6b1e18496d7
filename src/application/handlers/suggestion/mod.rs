//! Suggestion handlers - AI-assisted pros/cons generation.

mod suggest_pros_cons;

pub use suggest_pros_cons::{
    SuggestProsConsCommand, SuggestProsConsError, SuggestProsConsHandler, SuggestProsConsResult,
    SuggestionSettings, SuggestionSource,
};
