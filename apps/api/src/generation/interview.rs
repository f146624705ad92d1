//! Interview strategy: builds a question plan from a fixed bank.
//!
//! Without options the plan is the first `DEFAULT_QUESTION_COUNT` bank entries,
//! in bank order. `questionCount`, `difficultyMix` and `typeMix` reshape it;
//! selection is deterministic for a given request.

use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::generation::registry::{ArtifactKind, GenerationStrategy};
use crate::generation::request::{DifficultyMix, GenerationRequest, InterviewOptions, TypeMix};
use crate::models::artifact::{Artifact, Difficulty, InterviewPlan, Question, QuestionKind};

use crate::models::artifact::Difficulty::{Easy, Hard, Medium};
use crate::models::artifact::QuestionKind::{Behavioral, Technical};

pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const MINUTES_PER_QUESTION: u32 = 9;

/// `{role}` is replaced by the lowercased target role.
const QUESTION_BANK: &[(&str, QuestionKind, Difficulty, &str)] = &[
    (
        "Tell me about yourself and your experience with {role} development.",
        Behavioral,
        Easy,
        "Structure your answer using the STAR method (Situation, Task, Action, Result) and focus on relevant projects.",
    ),
    (
        "How do you handle state management in complex React applications?",
        Technical,
        Medium,
        "Discuss options like Context API, Redux, or Zustand. Mention when you'd use each approach.",
    ),
    (
        "Describe a challenging project you worked on and how you overcame obstacles.",
        Behavioral,
        Medium,
        "Choose a project that demonstrates problem-solving skills and technical growth.",
    ),
    (
        "How would you optimize the performance of a React application?",
        Technical,
        Hard,
        "Cover memo, useMemo, useCallback, code splitting, lazy loading, and profiling tools.",
    ),
    (
        "Where do you see yourself in 5 years, and how does this role fit into your career goals?",
        Behavioral,
        Easy,
        "Align your goals with the company's growth opportunities and show long-term thinking.",
    ),
    (
        "Walk me through how you use version control when working on a team.",
        Technical,
        Easy,
        "Mention branching strategy, pull requests, code review and how you resolve conflicts.",
    ),
    (
        "How do you decide what to test, and which kinds of tests do you write first?",
        Technical,
        Medium,
        "Contrast unit, integration and end-to-end tests and explain the trade-offs you make.",
    ),
    (
        "Design a service that delivers personalised content to millions of users. What trade-offs would you make?",
        Technical,
        Hard,
        "Start from requirements, then cover caching, data partitioning and failure modes.",
    ),
    (
        "Tell me about a time you disagreed with a technical decision. How did you handle it?",
        Behavioral,
        Hard,
        "Show that you argued with data, listened to the other side and committed once decided.",
    ),
    (
        "How do you prioritise when several stakeholders need something from you at once?",
        Behavioral,
        Medium,
        "Explain how you clarify impact and deadlines, and how you communicate trade-offs.",
    ),
    (
        "Explain what happens between typing a URL and seeing the rendered page.",
        Technical,
        Easy,
        "Go layer by layer: DNS, TCP/TLS, HTTP, parsing, layout and paint.",
    ),
    (
        "How would you track down a memory leak or performance regression in production?",
        Technical,
        Hard,
        "Describe reproducing the issue, the profiling tools you reach for and how you verify the fix.",
    ),
    (
        "Describe a situation where you had to deliver bad news to a manager or client.",
        Behavioral,
        Hard,
        "Be specific about timing, how you framed the problem and the plan you proposed.",
    ),
];

pub struct InterviewStrategy;

#[async_trait]
impl GenerationStrategy for InterviewStrategy {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::InterviewQuestions
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Artifact, AppError> {
        Ok(Artifact::Interview(build_plan(
            &request.target_role,
            &request.interview,
        )?))
    }
}

pub fn build_plan(
    target_role: &str,
    options: &InterviewOptions,
) -> Result<InterviewPlan, AppError> {
    let role = target_role.to_lowercase();
    let indices = select_indices(options)?;

    let questions: Vec<Question> = indices
        .into_iter()
        .map(|i| {
            let (prompt, kind, difficulty, tip) = QUESTION_BANK[i];
            Question {
                prompt: prompt.replace("{role}", &role),
                kind,
                difficulty,
                tip: tip.to_string(),
            }
        })
        .collect();

    Ok(InterviewPlan {
        estimated_time_minutes: questions.len() as u32 * MINUTES_PER_QUESTION,
        questions,
        focus_area: target_role.to_string(),
    })
}

/// Bank indices to use, ascending.
fn select_indices(options: &InterviewOptions) -> Result<Vec<usize>, AppError> {
    let count = options.question_count.unwrap_or(DEFAULT_QUESTION_COUNT);
    if count == 0 || count > QUESTION_BANK.len() {
        return Err(AppError::Validation(format!(
            "questionCount must be between 1 and {}",
            QUESTION_BANK.len()
        )));
    }

    if options.difficulty_mix.is_none() && options.type_mix.is_none() {
        return Ok((0..count).collect());
    }

    let mut difficulty_quota = options.difficulty_mix.map(|m| difficulty_quotas(count, m));
    let mut type_quota = options.type_mix.map(|m| type_quotas(count, m));
    let mut picked = vec![false; QUESTION_BANK.len()];
    let mut taken = 0;

    // Pass 1 honours both quotas, pass 2 only the type quota, pass 3 neither.
    for pass in 0..3 {
        for (i, &(_, kind, difficulty, _)) in QUESTION_BANK.iter().enumerate() {
            if taken == count {
                break;
            }
            if picked[i] {
                continue;
            }
            let type_ok = pass == 2 || has_room(&type_quota, kind);
            let difficulty_ok = pass >= 1 || has_room(&difficulty_quota, difficulty);
            if type_ok && difficulty_ok {
                picked[i] = true;
                taken += 1;
                consume(&mut type_quota, kind);
                consume(&mut difficulty_quota, difficulty);
            }
        }
    }

    Ok(picked
        .iter()
        .enumerate()
        .filter_map(|(i, &p)| p.then_some(i))
        .collect())
}

fn has_room<K: Eq + Hash>(quota: &Option<HashMap<K, usize>>, key: K) -> bool {
    match quota {
        None => true,
        Some(q) => q.get(&key).copied().unwrap_or(0) > 0,
    }
}

fn consume<K: Eq + Hash>(quota: &mut Option<HashMap<K, usize>>, key: K) {
    if let Some(remaining) = quota.as_mut().and_then(|q| q.get_mut(&key)) {
        *remaining = remaining.saturating_sub(1);
    }
}

fn difficulty_quotas(count: usize, mix: DifficultyMix) -> HashMap<Difficulty, usize> {
    apportion(count, &[(Easy, mix.easy), (Medium, mix.medium), (Hard, mix.hard)])
}

fn type_quotas(count: usize, mix: TypeMix) -> HashMap<QuestionKind, usize> {
    apportion(count, &[(Technical, mix.technical), (Behavioral, mix.behavioral)])
}

/// Largest-remainder apportionment of `total` slots by weight. Ties go to the
/// earlier entry. Weights must not all be zero (checked by the normalizer).
fn apportion<K: Copy + Eq + Hash>(total: usize, weights: &[(K, u32)]) -> HashMap<K, usize> {
    let sum: u64 = weights.iter().map(|&(_, w)| u64::from(w)).sum();
    if sum == 0 {
        return weights.iter().map(|&(k, _)| (k, 0)).collect();
    }

    let mut shares: Vec<(K, usize, u64)> = weights
        .iter()
        .map(|&(k, w)| {
            let scaled = total as u64 * u64::from(w);
            (k, (scaled / sum) as usize, scaled % sum)
        })
        .collect();

    let assigned: usize = shares.iter().map(|&(_, base, _)| base).sum();
    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| shares[b].2.cmp(&shares[a].2));
    for &i in order.iter().take(total - assigned) {
        shares[i].1 += 1;
    }

    shares.into_iter().map(|(k, n, _)| (k, n)).collect()
}
