use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders the same envelope: `{ "success": false, "error", "code" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidEnum { field: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Payload too large: maximum size is {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Unsupported generation kind: {0}")]
    UnsupportedKind(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidEnum { .. }
            | AppError::Validation(_)
            | AppError::UnsupportedMediaType(_)
            | AppError::PayloadTooLarge { .. } => StatusCode::BAD_REQUEST,
            AppError::UnsupportedKind(_) => StatusCode::NOT_FOUND,
            AppError::GenerationFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::InvalidEnum { .. } => "INVALID_ENUM",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            AppError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            AppError::UnsupportedKind(_) => "UNSUPPORTED_KIND",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

const MIB: usize = 1024 * 1024;

/// "10MB" for whole mebibytes, "4.8MB" otherwise, plain bytes under 1 MiB.
fn human_size(bytes: usize) -> String {
    if bytes < MIB {
        format!("{bytes} bytes")
    } else if bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MissingField(field) => format!("{field} is required"),
            AppError::InvalidEnum { field, value } => {
                format!("'{value}' is not a valid value for {field}")
            }
            AppError::Validation(msg) | AppError::UnsupportedMediaType(msg) => msg.clone(),
            AppError::PayloadTooLarge { limit } => {
                format!("File too large. Maximum size is {}.", human_size(*limit))
            }
            AppError::UnsupportedKind(kind) => format!("Unknown generation kind '{kind}'"),
            AppError::GenerationFailed(msg) => {
                tracing::error!("Generation failed: {msg}");
                "Content generation is temporarily unavailable. Please try again.".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
            "code": self.code(),
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_field_is_400_with_error_text() {
        let (status, body) = body_json(AppError::MissingField("resumeText")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "MISSING_FIELD");
        assert!(body["error"].as_str().unwrap().contains("resumeText"));
    }

    #[tokio::test]
    async fn test_payload_too_large_reports_megabytes() {
        let (status, body) = body_json(AppError::PayloadTooLarge {
            limit: 10 * 1024 * 1024,
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "File too large. Maximum size is 10MB.");
    }

    #[test]
    fn test_human_size_handles_uneven_limits() {
        assert_eq!(human_size(5_000_000), "4.8MB");
        assert_eq!(human_size(4096), "4096 bytes");
        assert_eq!(human_size(3 * MIB), "3MB");
    }

    #[tokio::test]
    async fn test_small_limit_is_reported_in_bytes() {
        let (_, body) = body_json(AppError::PayloadTooLarge { limit: 4096 }).await;
        assert_eq!(body["error"], "File too large. Maximum size is 4096 bytes.");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) =
            body_json(AppError::Internal(anyhow::anyhow!("secret stack detail"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_generation_failed_is_recoverable_503() {
        let (status, body) =
            body_json(AppError::GenerationFailed("backend timed out".to_string())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "GENERATION_FAILED");
    }

    #[test]
    fn test_unsupported_kind_maps_to_404() {
        assert_eq!(
            AppError::UnsupportedKind("poem".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
