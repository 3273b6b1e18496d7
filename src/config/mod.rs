//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `ORICA` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use orica::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod scoring;
mod server;
mod telemetry;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;
pub use server::{Environment, ServerConfig};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration with AI suggestions disabled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Log filter and output format
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Scoring engine knobs
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// AI provider configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ORICA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ORICA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ORICA__AI__API_KEY=...` -> `ai.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ORICA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.scoring.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
