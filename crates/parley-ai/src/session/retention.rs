//! History retention policy.
//!
//! The bound is counted in messages (`2 * exchanges`), not in exchange
//! boundaries. A cut made while a user message is still waiting for its
//! reply can leave the survivors starting with an assistant message.

use std::num::NonZeroUsize;

use crate::Message;

/// Number of user/assistant exchanges to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryLimit(NonZeroUsize);

impl HistoryLimit {
    /// Returns `None` for zero.
    pub fn new(exchanges: usize) -> Option<Self> {
        NonZeroUsize::new(exchanges).map(Self)
    }

    pub fn exchanges(self) -> usize {
        self.0.get()
    }

    /// Largest history length allowed under this limit.
    pub fn max_messages(self) -> usize {
        self.0.get().saturating_mul(2)
    }
}

/// Drop the oldest messages until `history` fits `limit`.
///
/// Returns how many messages were removed. Survivors keep their order and
/// content; a second call with no append in between removes nothing.
pub fn enforce(history: &mut Vec<Message>, limit: Option<HistoryLimit>) -> usize {
    let Some(limit) = limit else {
        return 0;
    };
    let excess = history.len().saturating_sub(limit.max_messages());
    if excess > 0 {
        history.drain(..excess);
    }
    excess
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn numbered(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Message::user(format!("m{i}"))
                } else {
                    Message::assistant(format!("m{i}"))
                }
            })
            .collect()
    }

    #[test]
    fn zero_is_not_a_limit() {
        assert!(HistoryLimit::new(0).is_none());
        assert_eq!(HistoryLimit::new(3).unwrap().max_messages(), 6);
    }

    #[test]
    fn max_messages_saturates() {
        let limit = HistoryLimit::new(usize::MAX).unwrap();
        assert_eq!(limit.max_messages(), usize::MAX);
    }

    #[test]
    fn unlimited_never_truncates() {
        let mut history = numbered(50);
        assert_eq!(enforce(&mut history, None), 0);
        assert_eq!(history.len(), 50);
    }

    #[test]
    fn within_bound_is_noop() {
        let mut history = numbered(4);
        let before = history.clone();
        assert_eq!(enforce(&mut history, HistoryLimit::new(2)), 0);
        assert_eq!(history, before);
    }

    #[test]
    fn keeps_exactly_the_last_two_l_messages() {
        for len in 0..12 {
            for l in 1..5 {
                let original = numbered(len);
                let mut history = original.clone();
                enforce(&mut history, HistoryLimit::new(l));

                let keep = len.min(2 * l);
                assert_eq!(history.len(), keep);
                assert_eq!(history[..], original[len - keep..]);
            }
        }
    }

    #[test]
    fn enforce_is_idempotent() {
        let mut once = numbered(9);
        enforce(&mut once, HistoryLimit::new(2));
        let mut twice = once.clone();
        assert_eq!(enforce(&mut twice, HistoryLimit::new(2)), 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn odd_overflow_leaves_assistant_first() {
        // u a u a u -> limit 1 keeps "a u": the cut lands mid-exchange.
        let mut history = numbered(5);
        assert_eq!(enforce(&mut history, HistoryLimit::new(1)), 3);
        assert_eq!(history[0].role, Role::Assistant);
        assert_eq!(history[1].role, Role::User);
    }
}
