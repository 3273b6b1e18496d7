//! Prompt text for requesting pros/cons from a language model.

/// Number of pros and of cons requested per option.
pub const SUGGESTIONS_PER_LIST: usize = 3;

/// System prompt sent with every suggestion request.
pub const SUGGESTION_SYSTEM_PROMPT: &str =
    "You are a professional decision-making assistant. Reply with valid JSON only.";

/// Builds the user prompt comparing two options.
pub fn suggestion_prompt(option_a: &str, option_b: &str) -> String {
    format!(
        r#"Compare these two options and generate {n} high-quality pros and {n} high-quality cons for each:
Option A: {a}
Option B: {b}

Requirements:
- Be specific and concrete
- Avoid generic statements
- Consider both short-term and long-term impacts
- Include potential risks and opportunities
- Format as valid JSON exactly like this:
{{
  "optionA": {{ "pros": ["pro 1", "pro 2", "pro 3"], "cons": ["con 1", "con 2", "con 3"] }},
  "optionB": {{ "pros": ["pro 1", "pro 2", "pro 3"], "cons": ["con 1", "con 2", "con 3"] }}
}}"#,
        n = SUGGESTIONS_PER_LIST,
        a = option_a,
        b = option_b,
    )
}
