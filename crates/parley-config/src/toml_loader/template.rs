//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[session]
# model = "gpt-4"
# temperature = 0.7        # 0.0-2.0
# max_tokens = 1000        # 1-128000
# history_limit = 10       # exchanges to keep; omit for unlimited
# initial_prompts = [
#     "You are a helpful assistant.",
#     "You always respond as a sailor.",
# ]

[provider]
# base_url = "https://api.openai.com/v1"
# timeout_secs = 120       # 1-600
# api_key_env = "OPENAI_KEY"

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
