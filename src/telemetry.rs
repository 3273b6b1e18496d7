//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter(config)?);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}

fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.log_level)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_builds() {
        assert!(build_filter(&TelemetryConfig::default()).is_ok());
    }
}
