//! OpenAI client struct and response parsing.

use serde::Deserialize;

use crate::{Choice, Completion, Message, ProviderError, Role, TokenUsage};

use super::config::OpenAiConfig;

/// OpenAI chat completion client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default = "assistant_role")]
    role: Role,
    content: Option<String>,
}

fn assistant_role() -> Role {
    Role::Assistant
}

#[derive(Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl From<ChatCompletionResponse> for Completion {
    fn from(response: ChatCompletionResponse) -> Self {
        let choices = response
            .choices
            .into_iter()
            .map(|c| Choice {
                message: Message {
                    role: c.message.role,
                    content: c.message.content.unwrap_or_default(),
                },
            })
            .collect();

        let usage = response
            .usage
            .map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Completion { choices, usage }
    }
}

/// Parse a successful response body.
pub(crate) fn parse_response(body: &str) -> Result<Completion, ProviderError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(response.into())
}

/// Pull a human-readable message out of an error body.
///
/// Uses the `{"error": {"message": ...}}` envelope when present, otherwise
/// the first 200 characters of the raw body.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.chars().take(200).collect(),
    }
}
