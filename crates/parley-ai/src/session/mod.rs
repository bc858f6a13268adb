//! Conversation session management.
//!
//! A `ConversationSession` holds the dialogue transcript, bounds it with
//! an optional exchange limit, and drives one completion round trip per
//! user turn.

mod chat;
mod manager;
mod options;
pub mod retention;
mod types;


pub use manager::ConversationSession;
pub use options::{GenerationParams, SessionOptions};
pub use retention::HistoryLimit;
pub use types::{Reply, SessionError, TurnOutcome};
