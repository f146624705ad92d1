//! Score estimation — pluggable, trait-based estimator behind the analysis strategy.
//!
//! Default: `RandomRangeEstimator` (demo behaviour, optionally seeded).
//! `KeywordScoreEstimator` is deterministic in (resume_text, target_role).
//! `ModelBackedEstimator` asks the LLM backend for a score.
//!
//! The analysis strategy holds an `Arc<dyn ScoreEstimator>`, chosen at startup via config.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::keywords::{contains_term, coverage, role_keywords};
use crate::generation::prompts::{SCORE_PROMPT_TEMPLATE, SCORE_SYSTEM};
use crate::generation::request::GenerationRequest;
use crate::llm_client::LlmClient;

/// Resume sections the keyword estimator looks for.
const SECTION_HEADINGS: &[&str] = &["experience", "skills", "education", "projects"];

/// Resume text is truncated to this many characters before going into a prompt.
const MAX_PROMPT_RESUME_CHARS: usize = 12_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEstimate {
    pub overall_score: u8, // 0 – 100
    pub skills_match: u8,  // 0 – 100
}

/// The score estimator trait. Implement this to swap backends without touching
/// the analysis strategy or the handlers.
#[async_trait]
pub trait ScoreEstimator: Send + Sync {
    async fn estimate(&self, request: &GenerationRequest) -> Result<ScoreEstimate, AppError>;

    /// "random" | "keyword" | "model", for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RandomRangeEstimator
// ────────────────────────────────────────────────────────────────────────────

/// overall_score uniform in [70, 100), skills_match uniform in [60, 85).
///
/// Unseeded draws from the thread-local generator. Seeded builds a fresh
/// `StdRng` per call, so every call with the same seed returns the same estimate.
#[derive(Debug, Clone, Default)]
pub struct RandomRangeEstimator {
    seed: Option<u64>,
}

impl RandomRangeEstimator {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

fn draw<R: Rng>(rng: &mut R) -> ScoreEstimate {
    ScoreEstimate {
        overall_score: rng.random_range(70..100),
        skills_match: rng.random_range(60..85),
    }
}

#[async_trait]
impl ScoreEstimator for RandomRangeEstimator {
    async fn estimate(&self, _request: &GenerationRequest) -> Result<ScoreEstimate, AppError> {
        let estimate = match self.seed {
            Some(seed) => draw(&mut StdRng::seed_from_u64(seed)),
            None => draw(&mut rand::rng()),
        };
        Ok(estimate)
    }

    fn backend(&self) -> &'static str {
        "random"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordScoreEstimator
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust deterministic estimator. No randomness, no I/O.
///
/// Algorithm:
/// 1. skills_match = share of the role's taxonomy keywords present × 100
/// 2. structure = 20 per standard section heading found + 20 if any digit
///    (quantified achievement) appears
/// 3. overall_score = 0.6 × skills_match + 0.4 × structure
pub struct KeywordScoreEstimator;

#[async_trait]
impl ScoreEstimator for KeywordScoreEstimator {
    async fn estimate(&self, request: &GenerationRequest) -> Result<ScoreEstimate, AppError> {
        Ok(compute_keyword_estimate(
            &request.resume_text,
            &request.target_role,
        ))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

fn compute_keyword_estimate(resume_text: &str, target_role: &str) -> ScoreEstimate {
    let keywords = role_keywords(target_role);
    let skills_match = (coverage(resume_text, keywords) * 100.0).round() as u32;

    let sections = SECTION_HEADINGS
        .iter()
        .filter(|h| contains_term(resume_text, h))
        .count() as u32;
    let has_metric = resume_text.chars().any(|c| c.is_ascii_digit());
    let structure = sections * 20 + if has_metric { 20 } else { 0 };

    let overall = (0.6 * skills_match as f32 + 0.4 * structure as f32).round() as u32;

    ScoreEstimate {
        overall_score: clamp_score(overall),
        skills_match: clamp_score(skills_match),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ModelBackedEstimator
// ────────────────────────────────────────────────────────────────────────────

/// Raw model output. Wider than `ScoreEstimate` so out-of-range numbers clamp
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct ModelScore {
    overall_score: u32,
    skills_match: u32,
}

/// Semantic estimator via the LLM backend. Retries live in `LlmClient`; an
/// exhausted or failed call is a recoverable `GenerationFailed`.
pub struct ModelBackedEstimator(pub LlmClient);

#[async_trait]
impl ScoreEstimator for ModelBackedEstimator {
    async fn estimate(&self, request: &GenerationRequest) -> Result<ScoreEstimate, AppError> {
        let prompt = build_score_prompt(request);
        let score: ModelScore = self
            .0
            .call_json(&prompt, SCORE_SYSTEM)
            .await
            .map_err(|e| AppError::GenerationFailed(format!("Score estimation failed: {e}")))?;

        Ok(ScoreEstimate {
            overall_score: clamp_score(score.overall_score),
            skills_match: clamp_score(score.skills_match),
        })
    }

    fn backend(&self) -> &'static str {
        "model"
    }
}

fn build_score_prompt(request: &GenerationRequest) -> String {
    let resume: String = request
        .resume_text
        .chars()
        .take(MAX_PROMPT_RESUME_CHARS)
        .collect();
    SCORE_PROMPT_TEMPLATE
        .replace("{target_role}", &request.target_role)
        .replace("{resume_text}", &resume)
}

fn clamp_score(value: u32) -> u8 {
    value.min(100) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::http::StatusCode;

    use super::*;
    use crate::generation::request::{normalize, RawGenerationRequest};
    use crate::llm_client::test_support::stub_client;

    fn request(resume_text: &str, target_role: &str) -> GenerationRequest {
        normalize(RawGenerationRequest {
            resume_text: Some(resume_text.to_string()),
            target_role: Some(target_role.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_random_estimates_stay_in_declared_ranges() {
        let estimator = RandomRangeEstimator::new();
        let req = request("John Doe", "Frontend Developer");
        for _ in 0..500 {
            let est = estimator.estimate(&req).await.unwrap();
            assert!((70..100).contains(&est.overall_score), "{est:?}");
            assert!((60..85).contains(&est.skills_match), "{est:?}");
        }
    }

    #[tokio::test]
    async fn test_seeded_estimator_is_reproducible() {
        let req = request("John Doe", "Frontend Developer");
        let a = RandomRangeEstimator::seeded(42).estimate(&req).await.unwrap();
        let b = RandomRangeEstimator::seeded(42).estimate(&req).await.unwrap();
        assert_eq!(a, b);
        assert!((70..100).contains(&a.overall_score));
    }

    #[tokio::test]
    async fn test_keyword_estimate_is_pure_function_of_input() {
        let req = request(
            "EXPERIENCE\nBuilt React and TypeScript apps, cut load time 30%\nSKILLS\nCSS, HTML",
            "Frontend Developer",
        );
        let a = KeywordScoreEstimator.estimate(&req).await.unwrap();
        let b = KeywordScoreEstimator.estimate(&req).await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_keyword_estimate_rewards_coverage() {
        let weak = compute_keyword_estimate("Cooked pasta", "Frontend Developer");
        let strong = compute_keyword_estimate(
            "EXPERIENCE SKILLS EDUCATION PROJECTS React TypeScript JavaScript HTML CSS \
             Node.js GraphQL Docker AWS Agile Team Leadership CI/CD Jest Redux 40%",
            "Frontend Developer",
        );
        assert_eq!(weak.skills_match, 0);
        assert_eq!(strong.skills_match, 100);
        assert_eq!(strong.overall_score, 100);
        assert!(weak.overall_score < strong.overall_score);
    }

    #[test]
    fn test_keyword_estimate_depends_on_target_role() {
        let text = "Python SQL Spark Airflow ETL Pandas";
        let data = compute_keyword_estimate(text, "Data Engineer");
        let frontend = compute_keyword_estimate(text, "Frontend Developer");
        assert!(data.skills_match > frontend.skills_match);
    }

    #[test]
    fn test_clamp_score_caps_at_100() {
        assert_eq!(clamp_score(250), 100);
        assert_eq!(clamp_score(73), 73);
    }

    #[test]
    fn test_score_prompt_interpolates_role_and_resume() {
        let prompt = build_score_prompt(&request("Jane Roe, Rust engineer", "Backend Engineer"));
        assert!(prompt.contains("Backend Engineer"));
        assert!(prompt.contains("Jane Roe, Rust engineer"));
        assert!(!prompt.contains("{target_role}"));
    }

    #[tokio::test]
    async fn test_model_estimator_clamps_model_reply() {
        let (client, _) = stub_client(
            0,
            StatusCode::OK,
            r#"{"overall_score": 140, "skills_match": 61}"#,
        )
        .await;
        let est = ModelBackedEstimator(client)
            .estimate(&request("Jane Roe", "Backend Engineer"))
            .await
            .unwrap();
        assert_eq!(est.overall_score, 100);
        assert_eq!(est.skills_match, 61);
    }

    #[tokio::test]
    async fn test_model_estimator_surfaces_exhausted_retries_as_generation_failed() {
        let (client, hits) = stub_client(u32::MAX, StatusCode::TOO_MANY_REQUESTS, "{}").await;
        let err = ModelBackedEstimator(client)
            .estimate(&request("Jane Roe", "Backend Engineer"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed(_)));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_model_score_accepts_out_of_range_numbers() {
        let raw: ModelScore =
            serde_json::from_str(r#"{"overall_score": 140, "skills_match": 55}"#).unwrap();
        assert_eq!(clamp_score(raw.overall_score), 100);
        assert_eq!(clamp_score(raw.skills_match), 55);
    }
}
