//! Provider section validation.

use super::helpers::validate_range;
use crate::schema::ParleyConfig;

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &ParleyConfig) {
    let provider = &config.provider;

    if !(provider.base_url.starts_with("http://") || provider.base_url.starts_with("https://")) {
        errors.push(format!(
            "provider.base_url = {:?} must start with http:// or https://",
            provider.base_url
        ));
    }
    validate_range(errors, "provider.timeout_secs", provider.timeout_secs, 1, 600);
    if provider.api_key_env.trim().is_empty() {
        errors.push("provider.api_key_env must not be empty".into());
    }
}
