//! Async request/response turn for ConversationSession.

use tracing::{debug, warn};

use crate::{CompletionProvider, CompletionRequest};

use super::manager::ConversationSession;
use super::types::{Reply, SessionError, TurnOutcome};

impl ConversationSession {
    /// Run one turn and report exactly what happened to history.
    ///
    /// The prompt is appended (and retention applied) before the provider
    /// is called, so it stays recorded even when the call fails.
    pub async fn exchange(
        &mut self,
        provider: &dyn CompletionProvider,
        prompt: impl Into<String>,
    ) -> TurnOutcome {
        let mut dropped = self.append_user_message(prompt);

        let request = CompletionRequest {
            model: self.params.model(),
            messages: &self.history,
            max_tokens: self.params.max_tokens(),
            temperature: self.params.temperature(),
        };
        debug!(
            session = %self.id.short(),
            messages = request.messages.len(),
            "Requesting completion"
        );

        let result = provider.complete(&request).await.and_then(|completion| {
            let text = completion.first_text()?.to_string();
            Ok((text, completion.usage))
        });

        match result {
            Ok((text, usage)) => {
                self.tracker.record(self.params.model(), &usage);
                dropped += self.append_assistant_message(text.clone());
                TurnOutcome::Replied(Reply {
                    text,
                    usage,
                    dropped,
                })
            }
            Err(error) => {
                warn!(session = %self.id.short(), %error, "Completion failed, prompt kept in history");
                TurnOutcome::Failed { error, dropped }
            }
        }
    }

    /// Add `prompt` as a user message and return the assistant's reply.
    pub async fn get_response(
        &mut self,
        provider: &dyn CompletionProvider,
        prompt: impl Into<String>,
    ) -> Result<String, SessionError> {
        self.exchange(provider, prompt)
            .await
            .into_result()
            .map(|reply| reply.text)
    }
}
