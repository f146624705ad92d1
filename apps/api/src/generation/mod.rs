// Resume feedback generation pipeline.
// Flow: normalize request → registry dispatch → strategy → response assembler.
// Model calls go through llm_client only.

pub mod analysis;
pub mod cover_letter;
pub mod handlers;
pub mod interview;
pub mod keywords;
pub mod linkedin_bio;
pub mod prompts;
pub mod registry;
pub mod request;
pub mod scoring;
pub mod tone;

use std::sync::Arc;
use std::time::Duration;

use crate::generation::analysis::AnalysisStrategy;
use crate::generation::cover_letter::CoverLetterStrategy;
use crate::generation::interview::InterviewStrategy;
use crate::generation::linkedin_bio::LinkedInBioStrategy;
use crate::generation::registry::{GenerationStrategy, GeneratorRegistry};
use crate::generation::scoring::ScoreEstimator;

/// Binds the four strategies. Only the analysis strategy takes a collaborator.
pub fn build_registry(
    estimator: Arc<dyn ScoreEstimator>,
    timeout: Duration,
) -> anyhow::Result<GeneratorRegistry> {
    let strategies: Vec<Arc<dyn GenerationStrategy>> = vec![
        Arc::new(AnalysisStrategy::new(estimator)),
        Arc::new(InterviewStrategy),
        Arc::new(CoverLetterStrategy),
        Arc::new(LinkedInBioStrategy),
    ];
    GeneratorRegistry::new(strategies, timeout)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::generation::scoring::RandomRangeEstimator;

    pub fn test_registry() -> GeneratorRegistry {
        build_registry(
            Arc::new(RandomRangeEstimator::seeded(1234)),
            Duration::from_secs(5),
        )
        .unwrap()
    }
}
