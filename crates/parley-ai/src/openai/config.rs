//! OpenAI client configuration.

use std::fmt;
use std::time::Duration;

use crate::ProviderError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Checked for the API key after the configured variable.
pub(crate) const FALLBACK_KEY_VAR: &str = "OPENAI_API_KEY";

/// OpenAI client configuration.
///
/// The API key is handed to the client here once. The crate never reads
/// the process environment itself; callers pass a lookup.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Resolve the API key through `lookup`.
    ///
    /// `primary_var` is tried first, then `OPENAI_API_KEY`. Blank values count
    /// as unset. The error names every variable that was tried.
    pub fn from_lookup<F>(primary_var: &str, lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut vars = vec![primary_var];
        if primary_var != FALLBACK_KEY_VAR {
            vars.push(FALLBACK_KEY_VAR);
        }

        vars.iter()
            .find_map(|&var| lookup(var).filter(|v| !v.trim().is_empty()))
            .map(Self::new)
            .ok_or_else(|| ProviderError::MissingCredential(format!("set {}", vars.join(" or "))))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the chat completions endpoint.
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
