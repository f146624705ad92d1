// LLM prompt constants for the generation module.
// Reuses the JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for resume scoring.
pub const SCORE_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Resume scoring prompt. Replace `{target_role}` and `{resume_text}` before sending.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"You are reviewing a resume for a {target_role} position.

Score it on two axes, each an integer from 0 to 100:
- overall_score: overall quality and readiness for the role (structure, clarity, quantified impact)
- skills_match: how well the listed skills and experience match what a {target_role} needs

Return a JSON object with this EXACT schema (no extra fields):
{"overall_score": 0, "skills_match": 0}

RESUME:
{resume_text}
"#;
