//! Cover letter strategy — assembles a letter from the tone register plus a
//! shared track-record paragraph.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::generation::registry::{ArtifactKind, GenerationStrategy};
use crate::generation::request::GenerationRequest;
use crate::generation::tone::cover_letter_register;
use crate::models::artifact::{Artifact, CoverLetterArtifact};

const NAME_PLACEHOLDER: &str = "[Your Name]";

const TRACK_RECORD: &str = "Throughout my career, I have demonstrated expertise in building scalable, \
    user-friendly applications using React and its ecosystem. My experience includes state management \
    with Redux and Context API, component optimization techniques, and implementing responsive designs \
    that work across all devices. I have successfully delivered multiple projects that improved user \
    engagement by 40% and reduced page load times by 30%.";

const SUGGESTIONS: &[&str] = &[
    "Customize the company name and specific role details",
    "Add specific examples from the job description",
    "Proofread carefully before sending",
    "Keep it to one page when printed",
];

pub struct CoverLetterStrategy;

#[async_trait]
impl GenerationStrategy for CoverLetterStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::CoverLetter
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Artifact, AppError> {
        Ok(Artifact::CoverLetter(CoverLetterArtifact {
            body: compose_letter(request),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }))
    }
}

fn compose_letter(request: &GenerationRequest) -> String {
    let register = cover_letter_register(request.tone);
    let fill = |template: &str| {
        template
            .replace("{job_title}", request.job_title_or_role())
            .replace("{company}", &request.company_name)
    };

    let name = signature_name(&request.resume_text).unwrap_or(NAME_PLACEHOLDER);

    [
        fill(register.greeting),
        fill(register.opening),
        TRACK_RECORD.to_string(),
        fill(register.motivation),
        fill(register.closing),
        format!("{}\n{name}", register.sign_off),
    ]
    .join("\n\n")
}

/// First non-empty resume line, if it reads like a personal name:
/// one to four words made of letters, apostrophes, hyphens or periods.
fn signature_name(resume_text: &str) -> Option<&str> {
    let first = resume_text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let words: Vec<&str> = first.split_whitespace().collect();
    if words.is_empty() || words.len() > 4 {
        return None;
    }
    let looks_like_name = words.iter().all(|w| {
        w.chars().any(|c| c.is_alphabetic())
            && w.chars()
                .all(|c| c.is_alphabetic() || matches!(c, '\'' | '-' | '.'))
    });
    looks_like_name.then_some(first)
}
