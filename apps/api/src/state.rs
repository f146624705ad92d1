use std::sync::Arc;

use crate::config::Config;
use crate::generation::registry::GeneratorRegistry;
use crate::upload::extractor::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything is immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// The four generation strategies, bound once in `main`.
    pub registry: Arc<GeneratorRegistry>,
    /// Pluggable PDF → text boundary. Default: SampleTextExtractor. Swap via TEXT_EXTRACTOR env.
    pub extractor: Arc<dyn TextExtractor>,
}
