//! Text extraction — pluggable, trait-based boundary between an uploaded PDF
//! and the resume text the generation pipeline consumes.
//!
//! Default: `SampleTextExtractor` (returns a fixed sample resume).
//! `PdfTextExtractor` runs `pdf-extract` on the blocking pool.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

pub const SAMPLE_RESUME_TEXT: &str = "John Doe
Software Engineer

EXPERIENCE
Frontend Developer at Tech Company (2021-2024)
- Developed React applications using TypeScript and modern frameworks
- Implemented responsive designs using Tailwind CSS
- Collaborated with cross-functional teams to deliver high-quality products
- Improved application performance by 40% through optimization techniques

SKILLS
- React, TypeScript, JavaScript
- HTML, CSS, Tailwind CSS
- Node.js, Express
- Git, GitHub
- Agile methodologies

EDUCATION
Bachelor of Science in Computer Science
University of Technology (2017-2021)

PROJECTS
E-commerce Platform
- Built full-stack web application using React and Node.js
- Implemented user authentication and payment processing
- Deployed using Docker and AWS services";

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, pdf: Bytes) -> Result<String, AppError>;

    /// "sample" | "pdf", for logs.
    fn backend(&self) -> &'static str;
}

/// Ignores the file content and returns `SAMPLE_RESUME_TEXT`.
pub struct SampleTextExtractor;

#[async_trait]
impl TextExtractor for SampleTextExtractor {
    async fn extract(&self, _pdf: Bytes) -> Result<String, AppError> {
        Ok(SAMPLE_RESUME_TEXT.to_string())
    }

    fn backend(&self) -> &'static str {
        "sample"
    }
}

pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf: Bytes) -> Result<String, AppError> {
        // pdf-extract is CPU-bound and may panic on malformed input; a panic
        // surfaces here as a JoinError.
        let extracted =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
                })?;

        let text = extracted.map_err(|e| {
            warn!("pdf-extract could not read upload: {e}");
            AppError::Internal(anyhow::anyhow!("Failed to process PDF file: {e}"))
        })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation(
                "No extractable text found in PDF".to_string(),
            ));
        }
        Ok(text.to_string())
    }

    fn backend(&self) -> &'static str {
        "pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_extractor_ignores_input() {
        let text = SampleTextExtractor
            .extract(Bytes::from_static(b"%PDF-1.4 whatever"))
            .await
            .unwrap();
        assert_eq!(text, SAMPLE_RESUME_TEXT);
        assert!(text.starts_with("John Doe"));
    }

    #[tokio::test]
    async fn test_pdf_extractor_rejects_garbage() {
        let err = PdfTextExtractor
            .extract(Bytes::from_static(b"%PDF-1.4 not really a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_) | AppError::Validation(_)));
    }
}
