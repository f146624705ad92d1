//! Input normalization: raw JSON body → validated `GenerationRequest` with defaults applied.

use serde::Deserialize;

use crate::errors::AppError;

pub const DEFAULT_TARGET_ROLE: &str = "Frontend Developer";
pub const DEFAULT_COMPANY_NAME: &str = "[Company Name]";

/// Stylistic register for generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Enthusiastic,
    Creative,
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Enthusiastic,
        Tone::Creative,
        Tone::Technical,
    ];

    /// Case-insensitive match against the four labels.
    pub fn parse(label: &str) -> Option<Tone> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Creative => "Creative",
            Tone::Technical => "Technical",
        }
    }
}

/// Relative weights for question difficulty. Missing keys weigh 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DifficultyMix {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyMix {
    pub fn total_weight(&self) -> u64 {
        u64::from(self.easy) + u64::from(self.medium) + u64::from(self.hard)
    }
}

/// Relative weights for question type. Missing keys weigh 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypeMix {
    pub technical: u32,
    pub behavioral: u32,
}

impl TypeMix {
    pub fn total_weight(&self) -> u64 {
        u64::from(self.technical) + u64::from(self.behavioral)
    }
}

/// Tuning knobs for the interview strategy. `None` means "use the default plan".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewOptions {
    pub question_count: Option<usize>,
    pub difficulty_mix: Option<DifficultyMix>,
    pub type_mix: Option<TypeMix>,
}

/// Request body as it arrives on any generation route. Everything is optional
/// here so that missing fields surface as `MissingField`, not a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGenerationRequest {
    pub resume_text: Option<String>,
    pub target_role: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub tone: Option<String>,
    pub question_count: Option<usize>,
    pub difficulty_mix: Option<DifficultyMix>,
    pub type_mix: Option<TypeMix>,
}

/// A validated request. Constructed only through `normalize`.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub resume_text: String,
    pub target_role: String,
    pub job_title: Option<String>,
    pub company_name: String,
    pub tone: Tone,
    pub interview: InterviewOptions,
}

impl GenerationRequest {
    /// Job title for the cover letter; falls back to the target role.
    pub fn job_title_or_role(&self) -> &str {
        self.job_title.as_deref().unwrap_or(&self.target_role)
    }
}

pub fn normalize(raw: RawGenerationRequest) -> Result<GenerationRequest, AppError> {
    let resume_text = non_blank(raw.resume_text).ok_or(AppError::MissingField("resumeText"))?;

    let tone = match non_blank(raw.tone) {
        None => Tone::default(),
        Some(label) => Tone::parse(&label).ok_or(AppError::InvalidEnum {
            field: "tone",
            value: label,
        })?,
    };

    if raw.question_count == Some(0) {
        return Err(AppError::Validation(
            "questionCount must be at least 1".to_string(),
        ));
    }
    if let Some(mix) = raw.difficulty_mix {
        if mix.total_weight() == 0 {
            return Err(AppError::Validation(
                "difficultyMix must have at least one non-zero weight".to_string(),
            ));
        }
    }
    if let Some(mix) = raw.type_mix {
        if mix.total_weight() == 0 {
            return Err(AppError::Validation(
                "typeMix must have at least one non-zero weight".to_string(),
            ));
        }
    }

    Ok(GenerationRequest {
        resume_text,
        target_role: non_blank(raw.target_role).unwrap_or_else(|| DEFAULT_TARGET_ROLE.to_string()),
        job_title: non_blank(raw.job_title),
        company_name: non_blank(raw.company_name)
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string()),
        tone,
        interview: InterviewOptions {
            question_count: raw.question_count,
            difficulty_mix: raw.difficulty_mix,
            type_mix: raw.type_mix,
        },
    })
}

/// Trims; blank becomes `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
