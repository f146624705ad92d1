pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;
use crate::upload::{self, MULTIPART_OVERHEAD_BYTES};

pub fn build_router(state: AppState) -> Router {
    let upload_body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ping", get(health::ping_handler))
        .route("/api/demo", get(health::demo_handler))
        // Generation API
        .route("/api/analyze-resume", post(handlers::handle_analyze_resume))
        .route(
            "/api/interview-questions",
            post(handlers::handle_interview_questions),
        )
        .route(
            "/api/generate-cover-letter",
            post(handlers::handle_cover_letter),
        )
        .route(
            "/api/generate-linkedin-bio",
            post(handlers::handle_linkedin_bio),
        )
        .route("/api/generate/:kind", post(handlers::handle_generate))
        // Upload API
        .route(
            "/api/upload-resume",
            post(upload::handle_upload_resume).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .with_state(state)
}
