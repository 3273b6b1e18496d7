use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use orica::adapters::ai::{OpenAIConfig, OpenAIProvider};
use orica::adapters::http::{app_router, AppState, RouterSettings};
use orica::adapters::memory::InMemoryStore;
use orica::application::handlers::SuggestionSettings;
use orica::config::{AppConfig, ConfigError};
use orica::domain::analysis::DecisionScorer;
use orica::domain::decision::Importance;
use orica::ports::AIError;
use orica::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("AI provider setup failed: {0}")]
    Provider(#[from] AIError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    telemetry::init(&config.telemetry)?;

    let scorer = DecisionScorer::new(config.scoring.to_options());
    let suggestion_settings = SuggestionSettings {
        temperature: config.ai.temperature,
        importance: Importance::new(config.ai.suggestion_importance),
        ..SuggestionSettings::default()
    };

    let mut state = AppState::from_store(Arc::new(InMemoryStore::new()), scorer)
        .with_mindset_by_default(config.scoring.use_mindset_by_default)
        .with_suggestion_settings(suggestion_settings);

    match config.ai.api_key() {
        Some(key) => {
            let provider = OpenAIProvider::new(
                OpenAIConfig::new(key)
                    .with_base_url(config.ai.base_url.clone())
                    .with_model(config.ai.model.clone())
                    .with_timeout(config.ai.timeout())
                    .with_max_retries(config.ai.max_retries),
            )?;
            info!(model = %config.ai.model, base_url = %config.ai.base_url, "AI suggestions enabled");
            state = state.with_ai_provider(Arc::new(provider));
        }
        None => warn!("no AI API key configured; suggestions will use generic fallback content"),
    }

    let settings = RouterSettings {
        cors_origins: config.server.cors_origins_list(),
        request_timeout: Some(config.server.request_timeout()),
    };
    let app = app_router(state, &settings);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        threshold = config.scoring.high_importance_threshold,
        "orica ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
