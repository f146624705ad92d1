//! LLM client — thin adapter over the Anthropic Messages API.
//!
//! Only the model-backed strategies talk to this client. Transient failures
//! (429, 5xx, transport errors) are retried with exponential backoff; anything
//! left after the last attempt is returned as an `LlmError` and the caller
//! surfaces it as `AppError::GenerationFailed`.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;
const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_BASE: Duration = Duration::from_secs(1);
const MIN_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gave up after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl MessagesResponse {
    fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    backoff_base: Duration,
}

impl LlmClient {
    /// `budget` is the whole time a call may take, retries included; each
    /// attempt gets a slice of it.
    pub fn new(api_key: String, budget: Duration) -> Result<Self, LlmError> {
        Self::with_endpoint(api_key, ANTHROPIC_API_URL, budget)
    }

    pub fn with_endpoint(
        api_key: String,
        endpoint: impl Into<String>,
        budget: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(attempt_timeout(budget))
            .build()?;
        Ok(Self {
            client,
            api_key,
            endpoint: endpoint.into(),
            backoff_base: BACKOFF_BASE,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Sends one prompt and returns the first text block.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = backoff_delay(self.backoff_base, attempt);
                warn!(
                    "LLM attempt {attempt} failed, retrying in {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.endpoint)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if is_retryable(status.as_u16()) {
                let text = response.text().await.unwrap_or_default();
                warn!("LLM API returned {status}: {text}");
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: text,
                });
                continue;
            }

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                    .map(|e| e.error.message)
                    .unwrap_or(text);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: MessagesResponse = response.json().await?;
            debug!(
                "LLM call ok: input_tokens={}, output_tokens={}",
                parsed.usage.input_tokens, parsed.usage.output_tokens
            );

            return parsed
                .first_text()
                .map(str::to_string)
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::Exhausted {
            attempts: MAX_ATTEMPTS,
        }))
    }

    /// Calls the model and deserializes its text reply as JSON.
    /// The prompt must instruct the model to return JSON only.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.complete(prompt, system).await?;
        Ok(serde_json::from_str(strip_json_fences(&text))?)
    }
}

/// base, 2×base, 4×base, ...
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base * (1 << attempt.saturating_sub(1))
}

/// Per-attempt timeout: what is left of `budget` after the backoff sleeps,
/// split evenly across attempts. Never below `MIN_ATTEMPT_TIMEOUT`.
fn attempt_timeout(budget: Duration) -> Duration {
    let backoff: Duration = (1..MAX_ATTEMPTS)
        .map(|attempt| backoff_delay(BACKOFF_BASE, attempt))
        .sum();
    (budget.saturating_sub(backoff) / MAX_ATTEMPTS).max(MIN_ATTEMPT_TIMEOUT)
}

fn is_retryable(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Strips ```json ... ``` or ``` ... ``` fences the model sometimes adds anyway.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::http::StatusCode;

    use super::test_support::stub_client;
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"overall_score\": 80}\n```";
        assert_eq!(strip_json_fences(input), "{\"overall_score\": 80}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_json_fences(input), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fences_passthrough() {
        assert_eq!(strip_json_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(BACKOFF_BASE, 1), Duration::from_secs(1));
        assert_eq!(backoff_delay(BACKOFF_BASE, 2), Duration::from_secs(2));
        assert_eq!(backoff_delay(BACKOFF_BASE, 3), Duration::from_secs(4));
    }

    #[test]
    fn test_attempts_fit_inside_budget() {
        let budget = Duration::from_secs(30);
        let per_attempt = attempt_timeout(budget);
        assert_eq!(per_attempt, Duration::from_secs(9));
        let backoff = backoff_delay(BACKOFF_BASE, 1) + backoff_delay(BACKOFF_BASE, 2);
        assert!(per_attempt * MAX_ATTEMPTS + backoff <= budget);
    }

    #[test]
    fn test_attempt_timeout_has_a_floor() {
        assert_eq!(attempt_timeout(Duration::from_secs(2)), MIN_ATTEMPT_TIMEOUT);
    }

    #[tokio::test]
    async fn test_rate_limited_calls_are_retried() {
        let (client, hits) = stub_client(2, StatusCode::TOO_MANY_REQUESTS, r#"{"ok": true}"#).await;
        let reply: serde_json::Value = client.call_json("prompt", "system").await.unwrap();
        assert_eq!(reply["ok"], true);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_server_errors_give_up_after_max_attempts() {
        let (client, hits) =
            stub_client(u32::MAX, StatusCode::SERVICE_UNAVAILABLE, "{}").await;
        let err = client
            .call_json::<serde_json::Value>("prompt", "system")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
        assert_eq!(hits.load(Ordering::SeqCst), MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let (client, hits) = stub_client(1, StatusCode::BAD_REQUEST, "{}").await;
        let err = client
            .call_json::<serde_json::Value>("prompt", "system")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "try again later");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fenced_reply_is_parsed() {
        let (client, _) = stub_client(0, StatusCode::OK, "```json\n{\"n\": 7}\n```").await;
        let reply: serde_json::Value = client.call_json("prompt", "system").await.unwrap();
        assert_eq!(reply["n"], 7);
    }

    #[test]
    fn test_only_rate_limit_and_server_errors_retry() {
        assert!(is_retryable(429));
        assert!(is_retryable(503));
        assert!(!is_retryable(400));
        assert!(!is_retryable(401));
    }
}
