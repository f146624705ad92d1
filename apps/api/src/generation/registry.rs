//! Generator Registry: maps an artifact kind to the strategy that produces it.
//!
//! Built once in `main` with all four strategies injected and carried in
//! `AppState`. Handlers never construct strategies themselves; swapping a
//! template strategy for a model-backed one happens here and nowhere else.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::request::GenerationRequest;
use crate::models::artifact::Artifact;

/// The four artifact kinds the service knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Analysis,
    InterviewQuestions,
    CoverLetter,
    LinkedInBio,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Analysis,
        ArtifactKind::InterviewQuestions,
        ArtifactKind::CoverLetter,
        ArtifactKind::LinkedInBio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Analysis => "analysis",
            ArtifactKind::InterviewQuestions => "interview-questions",
            ArtifactKind::CoverLetter => "cover-letter",
            ArtifactKind::LinkedInBio => "linkedin-bio",
        }
    }
}

impl FromStr for ArtifactKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, AppError> {
        ArtifactKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| AppError::UnsupportedKind(s.to_string()))
    }
}

/// One artifact kind's generation contract.
///
/// Carried in the registry as `Arc<dyn GenerationStrategy>`.
#[async_trait]
pub trait GenerationStrategy: Send + Sync {
    fn kind(&self) -> ArtifactKind;

    async fn generate(&self, request: &GenerationRequest) -> Result<Artifact, AppError>;
}

pub struct GeneratorRegistry {
    strategies: HashMap<ArtifactKind, Arc<dyn GenerationStrategy>>,
    timeout: Duration,
}

impl GeneratorRegistry {
    /// Binds each strategy under the kind it reports. Fails unless every kind
    /// is covered exactly once.
    pub fn new(
        strategies: Vec<Arc<dyn GenerationStrategy>>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut map: HashMap<ArtifactKind, Arc<dyn GenerationStrategy>> = HashMap::new();
        for strategy in strategies {
            let kind = strategy.kind();
            if map.insert(kind, strategy).is_some() {
                anyhow::bail!("Duplicate strategy registered for '{}'", kind.as_str());
            }
        }

        if let Some(missing) = ArtifactKind::ALL.iter().find(|k| !map.contains_key(*k)) {
            anyhow::bail!("No strategy registered for '{}'", missing.as_str());
        }

        Ok(Self {
            strategies: map,
            timeout,
        })
    }

    /// Resolves `kind` by its wire name and runs the matching strategy.
    pub async fn dispatch(
        &self,
        kind: &str,
        request: &GenerationRequest,
    ) -> Result<Artifact, AppError> {
        let kind = kind.parse::<ArtifactKind>()?;
        self.dispatch_kind(kind, request).await
    }

    /// Runs the strategy for `kind` under the registry timeout. Dropping the
    /// returned future cancels the strategy.
    async fn dispatch_kind(
        &self,
        kind: ArtifactKind,
        request: &GenerationRequest,
    ) -> Result<Artifact, AppError> {
        let strategy = self
            .strategies
            .get(&kind)
            .ok_or_else(|| AppError::UnsupportedKind(kind.as_str().to_string()))?;

        match tokio::time::timeout(self.timeout, strategy.generate(request)).await {
            Ok(Ok(artifact)) => {
                info!(
                    "Generated {} artifact for role '{}'",
                    kind.as_str(),
                    request.target_role
                );
                Ok(artifact)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                warn!(
                    "{} strategy exceeded {}ms timeout",
                    kind.as_str(),
                    self.timeout.as_millis()
                );
                Err(AppError::GenerationFailed(format!(
                    "{} generation timed out after {}s",
                    kind.as_str(),
                    self.timeout.as_secs()
                )))
            }
        }
    }
}
