//! Session section validation.

use super::helpers::{validate_range, validate_range_f64};
use crate::schema::ParleyConfig;

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &ParleyConfig) {
    let session = &config.session;

    if session.model.trim().is_empty() {
        errors.push("session.model must not be empty".into());
    }
    validate_range_f64(errors, "session.temperature", session.temperature, 0.0, 2.0);
    validate_range(errors, "session.max_tokens", session.max_tokens, 1, 128_000);
    if let Some(limit) = session.history_limit {
        validate_range(errors, "session.history_limit", limit, 1, 10_000);
    }
}
