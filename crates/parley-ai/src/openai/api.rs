//! CompletionProvider implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{Completion, CompletionProvider, CompletionRequest, ProviderError};

use super::client::{error_message, parse_response, OpenAiClient};

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(e.to_string())
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Completion, ProviderError> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "OpenAI chat completion request"
        );

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("OpenAI rate limit hit");
            return Err(ProviderError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ProviderError::Unauthorized(error_message(&body)));
        }
        if !status.is_success() {
            return Err(ProviderError::Api(format!(
                "HTTP {status}: {}",
                error_message(&body)
            )));
        }

        let completion = parse_response(&body)?;
        debug!(
            choices = completion.choices.len(),
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "OpenAI chat completion response"
        );
        Ok(completion)
    }
}
