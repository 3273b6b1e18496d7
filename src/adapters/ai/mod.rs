//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI-compatible chat completions (OpenAI, OpenRouter)

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_CONTENT};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
