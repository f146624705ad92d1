//! Axum route handlers for the generation API, plus the response assembler.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::registry::ArtifactKind;
use crate::generation::request::{normalize, RawGenerationRequest};
use crate::models::artifact::Artifact;
use crate::state::AppState;

/// Success envelope: `{ "success": true, ...artifact fields }`.
/// Error bodies carry `"success": false` (see `AppError`).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

type Payload = Result<Json<RawGenerationRequest>, JsonRejection>;
type GenerationResult = Result<Json<ApiResponse<Artifact>>, AppError>;

/// Normalizes the body and dispatches by kind name. Every generation route ends here.
async fn generate(state: &AppState, kind: &str, payload: Payload) -> GenerationResult {
    let Json(raw) = payload?;
    let request = normalize(raw)?;
    let artifact = state.registry.dispatch(kind, &request).await?;
    Ok(ApiResponse::ok(artifact))
}

/// POST /api/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    payload: Payload,
) -> GenerationResult {
    generate(&state, ArtifactKind::Analysis.as_str(), payload).await
}

/// POST /api/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    payload: Payload,
) -> GenerationResult {
    generate(&state, ArtifactKind::InterviewQuestions.as_str(), payload).await
}

/// POST /api/generate-cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    payload: Payload,
) -> GenerationResult {
    generate(&state, ArtifactKind::CoverLetter.as_str(), payload).await
}

/// POST /api/generate-linkedin-bio
pub async fn handle_linkedin_bio(
    State(state): State<AppState>,
    payload: Payload,
) -> GenerationResult {
    generate(&state, ArtifactKind::LinkedInBio.as_str(), payload).await
}

/// POST /api/generate/:kind
///
/// Generic entry point. The path segment is resolved by the registry after the
/// body is normalized; an unknown kind is a 404.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    payload: Payload,
) -> GenerationResult {
    generate(&state, &kind, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::artifact::BioArtifact;

    #[test]
    fn test_api_response_flattens_artifact() {
        let body = ApiResponse::ok(Artifact::Bio(BioArtifact {
            bio: "Hi".to_string(),
            hashtags: vec!["#Rust".to_string()],
            tips: vec![],
        }));
        let v = serde_json::to_value(&body.0).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["bio"], "Hi");
        assert_eq!(v["hashtags"][0], "#Rust");
        assert!(v.get("data").is_none());
    }
}
