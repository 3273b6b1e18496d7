//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the OpenAI-compatible completion endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key; suggestions fall back to generic content without one
    pub api_key: Option<Secret<String>>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_retries")]
    pub max_retries: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Importance given to persisted suggestions
    #[serde(default = "default_suggestion_importance")]
    pub suggestion_importance: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the key when one is set and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if !(1..=10).contains(&self.suggestion_importance) {
            return Err(ValidationError::InvalidSuggestionImportance);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            temperature: default_temperature(),
            suggestion_importance: default_suggestion_importance(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

fn default_temperature() -> f32 {
    0.5
}

fn default_suggestion_importance() -> u32 {
    5
}
