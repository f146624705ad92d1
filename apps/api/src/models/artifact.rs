//! Artifact shapes returned by the generation strategies.
//!
//! Field names on the wire follow the browser client's contract (camelCase,
//! `question` / `type` / `estimatedTime` / `coverLetter`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisArtifact {
    pub overall_score: u8, // 0 – 100
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>, // no duplicates
    pub skills_match: u8, // 0 – 100
    pub feedback: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    Technical,
    Behavioral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPlan {
    pub questions: Vec<Question>,
    pub focus_area: String,
    #[serde(rename = "estimatedTime")]
    pub estimated_time_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterArtifact {
    #[serde(rename = "coverLetter")]
    pub body: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioArtifact {
    pub bio: String,
    pub hashtags: Vec<String>,
    pub tips: Vec<String>,
}

/// Whatever a strategy produced. Serializes as the bare artifact.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Artifact {
    Analysis(AnalysisArtifact),
    Interview(InterviewPlan),
    CoverLetter(CoverLetterArtifact),
    Bio(BioArtifact),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_uses_client_field_names() {
        let q = Question {
            prompt: "Why Rust?".to_string(),
            kind: QuestionKind::Technical,
            difficulty: Difficulty::Hard,
            tip: "Talk about ownership.".to_string(),
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["question"], "Why Rust?");
        assert_eq!(v["type"], "Technical");
        assert_eq!(v["difficulty"], "Hard");
    }

    #[test]
    fn test_untagged_artifact_serializes_flat() {
        let artifact = Artifact::Interview(InterviewPlan {
            questions: vec![],
            focus_area: "Backend Engineer".to_string(),
            estimated_time_minutes: 45,
        });
        let v = serde_json::to_value(&artifact).unwrap();
        assert_eq!(v["focusArea"], "Backend Engineer");
        assert_eq!(v["estimatedTime"], 45);
        assert!(v.get("Interview").is_none());
    }

    #[test]
    fn test_cover_letter_body_is_cover_letter_on_wire() {
        let v = serde_json::to_value(CoverLetterArtifact {
            body: "Dear Hiring Manager".to_string(),
            suggestions: vec![],
        })
        .unwrap();
        assert_eq!(v["coverLetter"], "Dear Hiring Manager");
    }
}
