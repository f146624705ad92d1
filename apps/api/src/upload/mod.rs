//! Resume upload — multipart intake, validation, and text extraction.

pub mod extractor;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
const PDF_MIME: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extra body allowance on top of the file limit for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub text: String,
    pub file_name: String,
    pub file_size: usize,
}

/// POST /api/upload-resume
///
/// Reads the `resume` field, validates it, and hands the bytes to the
/// configured `TextExtractor`. Other fields are ignored.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    let limit = state.config.max_upload_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        check_content_type(content_type.as_deref())?;

        let data = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        validate_pdf(&data, limit)?;

        let file_size = data.len();
        let text = state.extractor.extract(data).await?;

        info!(
            "File uploaded: {file_name} ({file_size} bytes, extractor={})",
            state.extractor.backend()
        );

        return Ok(Json(UploadResponse {
            success: true,
            text,
            file_name,
            file_size,
        }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn check_content_type(content_type: Option<&str>) -> Result<(), AppError> {
    match content_type {
        Some(ct) if ct.eq_ignore_ascii_case(PDF_MIME) => Ok(()),
        other => {
            warn!("Rejected upload with content type {other:?}");
            Err(AppError::UnsupportedMediaType(
                "Only PDF files are allowed.".to_string(),
            ))
        }
    }
}

/// Size and signature checks on the raw bytes.
fn validate_pdf(data: &[u8], limit: usize) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if data.len() > limit {
        return Err(AppError::PayloadTooLarge { limit });
    }
    if !data.starts_with(PDF_MAGIC) {
        return Err(AppError::UnsupportedMediaType(
            "File is not a valid PDF.".to_string(),
        ));
    }
    Ok(())
}

/// A body-limit failure while streaming is reported as an oversized file.
fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Validation(e.body_text())
    }
}
