//! Conversation session settings.

use serde::{Deserialize, Serialize};

/// Generation parameters and history retention for the chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Number of exchanges to keep. Absent means unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<u32>,
    /// Sent as user messages before the first turn.
    pub initial_prompts: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4".into(),
            temperature: 0.7,
            max_tokens: 1000,
            history_limit: None,
            initial_prompts: vec![
                "You are a helpful assistant.".into(),
                "You always respond as a sailor.".into(),
            ],
        }
    }
}
