//! Analysis strategy — scores a resume and lists strengths, improvements and keyword gaps.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::keywords::{missing_keywords, role_keywords};
use crate::generation::registry::{ArtifactKind, GenerationStrategy};
use crate::generation::request::GenerationRequest;
use crate::generation::scoring::ScoreEstimator;
use crate::models::artifact::{AnalysisArtifact, Artifact};

const STRENGTHS: &[&str] = &[
    "Strong technical skills in React and TypeScript",
    "Clear project descriptions with measurable outcomes",
    "Good use of action verbs and quantified achievements",
    "Relevant experience for the target role",
];

const IMPROVEMENTS: &[&str] = &[
    "Add more industry-specific keywords",
    "Include soft skills and leadership examples",
    "Optimize for ATS (Applicant Tracking System)",
    "Add more quantified results and metrics",
];

pub struct AnalysisStrategy {
    estimator: Arc<dyn ScoreEstimator>,
}

impl AnalysisStrategy {
    pub fn new(estimator: Arc<dyn ScoreEstimator>) -> Self {
        Self { estimator }
    }
}

#[async_trait]
impl GenerationStrategy for AnalysisStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Analysis
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Artifact, AppError> {
        let estimate = self.estimator.estimate(request).await?;
        debug!(
            "Score estimate from {} backend: {:?}",
            self.estimator.backend(),
            estimate
        );

        Ok(Artifact::Analysis(AnalysisArtifact {
            overall_score: estimate.overall_score,
            strengths: to_owned(STRENGTHS),
            improvements: to_owned(IMPROVEMENTS),
            missing_keywords: missing_keywords(
                &request.resume_text,
                role_keywords(&request.target_role),
            ),
            skills_match: estimate.skills_match,
            feedback: feedback_for(&request.target_role),
        }))
    }
}

fn feedback_for(target_role: &str) -> String {
    format!(
        "Your resume shows strong potential for a {target_role} position. \
         The technical skills section is well-developed, but consider adding more specific \
         examples of your impact and results. Including metrics and quantified achievements \
         will make your resume more compelling to hiring managers."
    )
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::request::{normalize, RawGenerationRequest};
    use crate::generation::scoring::{KeywordScoreEstimator, RandomRangeEstimator};

    fn request(resume_text: &str, target_role: Option<&str>) -> GenerationRequest {
        normalize(RawGenerationRequest {
            resume_text: Some(resume_text.to_string()),
            target_role: target_role.map(str::to_string),
            ..Default::default()
        })
        .unwrap()
    }

    async fn analyze(strategy: &AnalysisStrategy, req: &GenerationRequest) -> AnalysisArtifact {
        match strategy.generate(req).await.unwrap() {
            Artifact::Analysis(a) => a,
            other => panic!("expected analysis artifact, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_random_policy_scores_in_range() {
        let strategy = AnalysisStrategy::new(Arc::new(RandomRangeEstimator::new()));
        let req = request("John Doe - Software Engineer", None);
        for _ in 0..50 {
            let a = analyze(&strategy, &req).await;
            assert!((70..100).contains(&a.overall_score));
            assert!((60..85).contains(&a.skills_match));
        }
    }

    #[tokio::test]
    async fn test_feedback_mentions_target_role() {
        let strategy = AnalysisStrategy::new(Arc::new(RandomRangeEstimator::seeded(7)));
        let a = analyze(&strategy, &request("Jane Roe", Some("Data Engineer"))).await;
        assert!(a.feedback.contains("Data Engineer position"));
    }

    #[tokio::test]
    async fn test_structure_is_populated() {
        let strategy = AnalysisStrategy::new(Arc::new(RandomRangeEstimator::seeded(7)));
        let a = analyze(&strategy, &request("Jane Roe", None)).await;
        assert_eq!(a.strengths.len(), 4);
        assert_eq!(a.improvements.len(), 4);
        assert!(!a.missing_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_missing_keywords_exclude_terms_in_resume() {
        let strategy = AnalysisStrategy::new(Arc::new(KeywordScoreEstimator));
        let a = analyze(
            &strategy,
            &request("Skills: React, GraphQL, Docker", Some("Frontend Developer")),
        )
        .await;
        assert!(!a.missing_keywords.iter().any(|k| k == "GraphQL"));
        assert!(!a.missing_keywords.iter().any(|k| k == "React"));
        assert!(a.missing_keywords.iter().any(|k| k == "Redux"));
    }

    #[tokio::test]
    async fn test_keyword_policy_is_deterministic() {
        let strategy = AnalysisStrategy::new(Arc::new(KeywordScoreEstimator));
        let req = request("EXPERIENCE\nReact, TypeScript, 40% faster", None);
        let a = analyze(&strategy, &req).await;
        let b = analyze(&strategy, &req).await;
        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.skills_match, b.skills_match);
        assert_eq!(a.missing_keywords, b.missing_keywords);
    }
}
