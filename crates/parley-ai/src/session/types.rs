//! Session errors and turn outcomes.

use crate::{ProviderError, TokenUsage};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A successful turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Assistant text, already appended to history.
    pub text: String,
    pub usage: TokenUsage,
    /// Messages dropped by retention across both appends of this turn.
    pub dropped: usize,
}

/// Result of one user turn.
///
/// Either way the prompt has been appended to history. On failure there is
/// no assistant reply after it; sending another prompt leaves two user
/// messages in a row.
#[derive(Debug)]
pub enum TurnOutcome {
    Replied(Reply),
    Failed {
        error: ProviderError,
        /// Messages dropped by retention when the prompt was appended.
        dropped: usize,
    },
}

impl TurnOutcome {
    pub fn is_replied(&self) -> bool {
        matches!(self, TurnOutcome::Replied(_))
    }

    pub fn into_result(self) -> Result<Reply, SessionError> {
        match self {
            TurnOutcome::Replied(reply) => Ok(reply),
            TurnOutcome::Failed { error, .. } => Err(SessionError::Provider(error)),
        }
    }
}
