mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;
mod upload;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, ExtractorBackend, ScoreBackend};
use crate::generation::scoring::{
    KeywordScoreEstimator, ModelBackedEstimator, RandomRangeEstimator, ScoreEstimator,
};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upload::extractor::{PdfTextExtractor, SampleTextExtractor, TextExtractor};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeAI API v{}", env!("CARGO_PKG_VERSION"));

    let estimator = build_estimator(&config)?;
    info!("Score estimator initialized (backend: {})", estimator.backend());

    let extractor = build_extractor(&config);
    info!("Text extractor initialized (backend: {})", extractor.backend());

    let registry = generation::build_registry(estimator, config.generation_timeout)?;
    info!(
        "Generator registry initialized (timeout: {}s)",
        config.generation_timeout.as_secs()
    );

    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        registry: Arc::new(registry),
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_estimator(config: &Config) -> Result<Arc<dyn ScoreEstimator>> {
    let estimator: Arc<dyn ScoreEstimator> = match config.score_backend {
        ScoreBackend::Random => match config.score_seed {
            Some(seed) => Arc::new(RandomRangeEstimator::seeded(seed)),
            None => Arc::new(RandomRangeEstimator::new()),
        },
        ScoreBackend::Keyword => Arc::new(KeywordScoreEstimator),
        ScoreBackend::Model => {
            let key = config.model_api_key()?.to_string();
            let llm = LlmClient::new(key, config.generation_timeout)
                .context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(ModelBackedEstimator(llm))
        }
    };
    Ok(estimator)
}

fn build_extractor(config: &Config) -> Arc<dyn TextExtractor> {
    match config.extractor_backend {
        ExtractorBackend::Sample => Arc::new(SampleTextExtractor),
        ExtractorBackend::Pdf => Arc::new(PdfTextExtractor),
    }
}
