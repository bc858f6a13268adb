//! Session construction options and validated generation parameters.

use super::retention::HistoryLimit;
use super::types::SessionError;

/// Everything needed to start a conversation.
///
/// Defaults: `gpt-4`, temperature 0.7, 1000 max tokens, unlimited history,
/// no initial prompts.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Exchanges to keep; `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Appended as user messages, in order, when the session is built.
    pub initial_prompts: Vec<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            history_limit: None,
            initial_prompts: Vec::new(),
        }
    }
}

impl SessionOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_history_limit(mut self, exchanges: Option<usize>) -> Self {
        self.history_limit = exchanges;
        self
    }

    pub fn with_initial_prompts<I, S>(mut self, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_prompts = prompts.into_iter().map(Into::into).collect();
        self
    }

    /// Split into checked parameters and limit.
    pub(crate) fn validate(&self) -> Result<(GenerationParams, Option<HistoryLimit>), SessionError> {
        if self.model.trim().is_empty() {
            return Err(SessionError::InvalidConfiguration(
                "model must not be empty".into(),
            ));
        }
        if self.max_tokens == 0 {
            return Err(SessionError::InvalidConfiguration(
                "max_tokens must be positive".into(),
            ));
        }
        let limit = match self.history_limit {
            None => None,
            Some(n) => Some(HistoryLimit::new(n).ok_or_else(|| {
                SessionError::InvalidConfiguration("history_limit must be positive".into())
            })?),
        };

        let params = GenerationParams {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        Ok((params, limit))
    }
}

/// Generation parameters fixed for the lifetime of a session.
///
/// Temperature is passed through untouched; the provider decides what
/// range it accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl GenerationParams {
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}
