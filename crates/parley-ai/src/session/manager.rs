//! ConversationSession struct and history management.

use parley_common::SessionId;
use tracing::debug;

use crate::token_tracker::TokenTracker;
use crate::{Message, Role};

use super::options::{GenerationParams, SessionOptions};
use super::retention::{self, HistoryLimit};
use super::types::SessionError;

/// A conversation: the transcript replayed to the provider on every turn.
pub struct ConversationSession {
    pub(super) id: SessionId,
    pub(super) history: Vec<Message>,
    pub(super) limit: Option<HistoryLimit>,
    pub(super) params: GenerationParams,
    pub(super) tracker: TokenTracker,
}

impl ConversationSession {
    /// Build a session, seeding history with the initial prompts.
    ///
    /// Retention runs after each seeded prompt, so more than
    /// `2 * history_limit` prompts leaves only the last ones.
    pub fn new(options: SessionOptions) -> Result<Self, SessionError> {
        let (params, limit) = options.validate()?;
        let mut session = Self {
            id: SessionId::new(),
            history: Vec::new(),
            limit,
            params,
            tracker: TokenTracker::new(),
        };
        for prompt in options.initial_prompts {
            session.append_user_message(prompt);
        }
        debug!(
            session = %session.id.short(),
            model = %session.params.model(),
            seeded = session.history.len(),
            "Session created"
        );
        Ok(session)
    }

    /// Append a user message and apply retention. Returns messages dropped.
    pub fn append_user_message(&mut self, text: impl Into<String>) -> usize {
        self.push(Role::User, text.into())
    }

    /// Append an assistant message and apply retention. Returns messages dropped.
    pub fn append_assistant_message(&mut self, text: impl Into<String>) -> usize {
        self.push(Role::Assistant, text.into())
    }

    fn push(&mut self, role: Role, content: String) -> usize {
        self.history.push(Message { role, content });
        let dropped = retention::enforce(&mut self.history, self.limit);
        if dropped > 0 {
            debug!(
                session = %self.id.short(),
                dropped,
                kept = self.history.len(),
                "History truncated"
            );
        }
        dropped
    }

    /// The full transcript, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn limit(&self) -> Option<HistoryLimit> {
        self.limit
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Forget the transcript. Parameters and usage totals are kept.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
