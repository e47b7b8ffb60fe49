use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::ChatClient;
use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Environment variable holding the OpenAI API key.
const KEY_VAR: &str = "OPENAI_API_KEY";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

/// OpenAI Chat Completions API request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the Chat Completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API (and compatible endpoints).
///
/// Implements [`ChatClient`] so higher-level components stay decoupled from
/// transport and serialization details.
///
/// The API key is resolved from the environment on every call, never cached.
/// A missing key fails before any network I/O. Every other failure (auth,
/// quota, malformed request, transport) is collapsed uniformly into
/// [`DomainError::Provider`] carrying the original error text.
///
/// Overrides:
///
/// ```text
/// OPENAI_BASE_URL=https://api.openai.com
/// OPENAI_MODEL=gpt-4o-mini
/// ```
pub struct OpenAiChatClient {
    client: reqwest::Client,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
    /// Name of the environment variable holding the credential.
    key_var: String,
}

impl OpenAiChatClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{COMPLETIONS_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            model: model.into(),
            url,
            key_var: KEY_VAR.to_string(),
        }
    }

    /// Construct from environment variables:
    /// - `OPENAI_BASE_URL` - optional; defaults to `https://api.openai.com`
    /// - `OPENAI_MODEL`    - optional; defaults to `gpt-4o-mini`
    pub fn from_env(timeout: Duration) -> Self {
        let base =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(model, base, timeout)
    }

    /// Override the credential variable name. Used by tests to isolate
    /// process-global environment state.
    pub fn with_key_var(mut self, var: impl Into<String>) -> Self {
        self.key_var = var.into();
        self
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        // Request-time lookup: a missing key must fail before any network call.
        let api_key = std::env::var(&self.key_var)
            .map_err(|_| DomainError::missing_credential(&self.key_var))?;

        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("OpenAiChatClient: request failed: {e}");
                DomainError::provider(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(DomainError::provider(format!("API error {status}: {body}")));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            warn!("OpenAiChatClient: failed to parse response: {e}");
            DomainError::provider(format!("failed to parse response: {e}"))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::provider("response contained no completion choices"))
    }
}
