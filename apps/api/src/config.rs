use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

/// Default upload limit: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which `ScoreEstimator` backs the analysis strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreBackend {
    #[default]
    Random,
    Keyword,
    Model,
}

impl FromStr for ScoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ScoreBackend::Random),
            "keyword" => Ok(ScoreBackend::Keyword),
            "model" => Ok(ScoreBackend::Model),
            other => Err(anyhow!(
                "SCORE_ESTIMATOR must be one of random|keyword|model, got '{other}'"
            )),
        }
    }
}

/// Which `TextExtractor` backs the upload route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractorBackend {
    #[default]
    Sample,
    Pdf,
}

impl FromStr for ExtractorBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sample" => Ok(ExtractorBackend::Sample),
            "pdf" => Ok(ExtractorBackend::Pdf),
            other => Err(anyhow!(
                "TEXT_EXTRACTOR must be one of sample|pdf, got '{other}'"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub score_backend: ScoreBackend,
    /// Makes the random estimator reproducible (demos, load tests).
    pub score_seed: Option<u64>,
    /// Required only when `score_backend` is `Model`.
    pub anthropic_api_key: Option<String>,
    pub extractor_backend: ExtractorBackend,
    pub max_upload_bytes: usize,
    pub generation_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            score_backend: ScoreBackend::Random,
            score_seed: None,
            anthropic_api_key: None,
            extractor_backend: ExtractorBackend::Sample,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            generation_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let score_backend = parse_env("SCORE_ESTIMATOR")?.unwrap_or(defaults.score_backend);
        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Config {
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            score_backend,
            score_seed: parse_env("SCORE_SEED")?,
            anthropic_api_key,
            extractor_backend: parse_env("TEXT_EXTRACTOR")?
                .unwrap_or(defaults.extractor_backend),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES")?
                .unwrap_or(defaults.max_upload_bytes),
            generation_timeout: parse_env::<u64>("GENERATION_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.generation_timeout),
        })
    }
}

impl Config {
    /// The key for the model-backed estimator. Only called when that backend is selected.
    pub fn model_api_key(&self) -> Result<&str> {
        self.anthropic_api_key
            .as_deref()
            .ok_or_else(|| anyhow!("ANTHROPIC_API_KEY must be set when SCORE_ESTIMATOR=model"))
    }
}

/// Reads and parses an optional variable. Unset is `Ok(None)`; malformed is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(None),
    }
}
