//! Conversation engine for Parley.
//!
//! Provides:
//! - `ConversationSession`, an ordered message log with optional
//!   exchange-based retention
//! - the `CompletionProvider` seam the session talks to
//! - an OpenAI-compatible chat completion client
//! - token usage tracking

pub mod openai;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{
    retention, ConversationSession, GenerationParams, HistoryLimit, Reply, SessionError,
    SessionOptions, TurnOutcome,
};
pub use token_tracker::TokenTracker;

/// Anything that can turn a message log into completion choices.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Completion, ProviderError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One completion call: generation parameters plus a snapshot of the log.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Clone, Default)]
pub struct Completion {
    pub choices: Vec<Choice>,
    pub usage: TokenUsage,
}

impl Completion {
    /// Completion with a single assistant choice.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: Message::assistant(text),
            }],
            usage: TokenUsage::default(),
        }
    }

    /// Text of the top choice. A completion without choices is malformed.
    pub fn first_text(&self) -> Result<&str, ProviderError> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
    #[error("Completion contained no choices")]
    EmptyResponse,
    #[error("Missing credential: {0}")]
    MissingCredential(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_str::<Message>(r#"{"role":"tool","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_serializes_wire_shape() {
        let messages = vec![Message::user("hello")];
        let request = CompletionRequest {
            model: "gpt-4",
            messages: &messages,
            max_tokens: 1000,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn first_text_reads_top_choice() {
        let completion = Completion {
            choices: vec![
                Choice {
                    message: Message::assistant("first"),
                },
                Choice {
                    message: Message::assistant("second"),
                },
            ],
            usage: TokenUsage::default(),
        };
        assert_eq!(completion.first_text().unwrap(), "first");
    }

    #[test]
    fn first_text_without_choices_is_empty_response() {
        let completion = Completion::default();
        assert!(matches!(
            completion.first_text(),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[test]
    fn usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }
}
