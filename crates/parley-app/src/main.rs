mod cli;
mod repl;

use std::process::ExitCode;
use std::time::Duration;

use parley_ai::{ConversationSession, OpenAiClient, OpenAiConfig, SessionOptions};
use parley_common::ParleyError;
use parley_config::ParleyConfig;
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Endpoint override, takes precedence over `provider.base_url`.
const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Load config from `--config` or the platform default, apply CLI overrides,
/// then validate the merged result.
fn resolve_config(args: &cli::Args) -> parley_common::Result<ParleyConfig> {
    let mut config = parley_config::load(args.config.as_deref().map(std::path::Path::new))?;

    if let Some(model) = &args.model {
        config.session.model = model.clone();
    }
    if let Some(limit) = args.history_limit {
        config.session.history_limit = Some(limit);
    }
    if let Some(temperature) = args.temperature {
        config.session.temperature = temperature;
    }
    if let Some(max_tokens) = args.max_tokens {
        config.session.max_tokens = max_tokens;
    }

    parley_config::validation::validate(&config)?;
    Ok(config)
}

/// `--log-level` first, then `[logging].level`, then `info`.
fn log_directive(args: &cli::Args, config: Option<&ParleyConfig>) -> String {
    match (&args.log_level, config) {
        (Some(level), _) => level.clone(),
        (None, Some(config)) => config.logging.level.as_directive().to_string(),
        (None, None) => "info".to_string(),
    }
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    )
}

/// Install the subscriber before config is read so loader logs are kept.
/// The returned handle swaps in the configured level afterwards.
fn init_logging(directive: &str) -> LogHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn session_options(config: &ParleyConfig) -> SessionOptions {
    let session = &config.session;
    SessionOptions::new(session.model.clone())
        .with_temperature(session.temperature)
        .with_max_tokens(session.max_tokens)
        .with_history_limit(session.history_limit.map(|n| n as usize))
        .with_initial_prompts(session.initial_prompts.iter().cloned())
}

fn provider_config<F>(
    config: &ParleyConfig,
    lookup: F,
) -> Result<OpenAiConfig, parley_ai::ProviderError>
where
    F: Fn(&str) -> Option<String>,
{
    let provider = &config.provider;
    let base_url = lookup(BASE_URL_VAR)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| provider.base_url.clone());

    Ok(OpenAiConfig::from_lookup(&provider.api_key_env, &lookup)?
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(u64::from(provider.timeout_secs))))
}

async fn run(args: cli::Args, logging: LogHandle) -> parley_common::Result<()> {
    let config = resolve_config(&args)?;

    if args.log_level.is_none() {
        let directive = log_directive(&args, Some(&config));
        if let Err(e) = logging.reload(build_filter(&directive)) {
            warn!(error = %e, "could not apply configured log level");
        }
    }

    let client = provider_config(&config, |var| std::env::var(var).ok())
        .and_then(OpenAiClient::new)
        .map_err(|e| ParleyError::Ai(e.to_string()))?;
    let mut session = ConversationSession::new(session_options(&config))
        .map_err(|e| ParleyError::Ai(e.to_string()))?;

    info!(
        session = %session.id(),
        model = %session.params().model(),
        history_limit = ?config.session.history_limit,
        "Parley starting"
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut session, &client, stdin, &mut stdout).await?;

    let tracker = session.tracker();
    let usage = tracker
        .for_model(session.params().model())
        .copied()
        .unwrap_or_default();
    info!(
        messages = session.len(),
        calls = tracker.call_count(),
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        "Parley finished"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal; the key may already be exported.
    let _ = dotenvy::dotenv();

    let args = cli::parse();
    let logging = init_logging(&log_directive(&args, None));
    match run(args, logging).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("parley: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn session_options_follow_config() {
        let mut config = ParleyConfig::default();
        config.session.history_limit = Some(4);
        config.session.initial_prompts = vec!["be brief".into()];

        let session = ConversationSession::new(session_options(&config)).unwrap();
        assert_eq!(session.params().model(), "gpt-4");
        assert_eq!(session.limit().map(|l| l.exchanges()), Some(4));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nmodel = \"from-file\"\nmax_tokens = 50\n").unwrap();

        let args = cli::Args::try_parse_from([
            "parley",
            "--config",
            path.to_str().unwrap(),
            "--model",
            "from-cli",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.session.model, "from-cli");
        assert_eq!(config.session.max_tokens, 50);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let args = cli::Args::try_parse_from([
            "parley",
            "--config",
            path.to_str().unwrap(),
            "--history-limit",
            "0",
        ])
        .unwrap();
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("session.history_limit"));
    }

    #[test]
    fn cli_override_repairs_invalid_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nmax_tokens = 0\n").unwrap();

        let args = cli::Args::try_parse_from([
            "parley",
            "--config",
            path.to_str().unwrap(),
            "--max-tokens",
            "100",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.session.max_tokens, 100);
    }

    #[test]
    fn invalid_file_value_without_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nmax_tokens = 0\n").unwrap();

        let args =
            cli::Args::try_parse_from(["parley", "--config", path.to_str().unwrap()]).unwrap();
        let err = resolve_config(&args).unwrap_err();
        assert!(err.to_string().contains("session.max_tokens"));
    }

    fn custom_key_config() -> ParleyConfig {
        let mut config = ParleyConfig::default();
        config.provider.api_key_env = "MY_KEY".into();
        config.provider.base_url = "http://config.local/v1".into();
        config
    }

    #[test]
    fn base_url_env_overrides_config() {
        let openai = provider_config(&custom_key_config(), |var| match var {
            "MY_KEY" => Some("sk-test".into()),
            "OPENAI_BASE_URL" => Some("http://env.local/v1/".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(openai.api_key, "sk-test");
        assert_eq!(openai.base_url, "http://env.local/v1");
    }

    #[test]
    fn config_base_url_used_without_env() {
        let openai = provider_config(&custom_key_config(), |var| {
            (var == "MY_KEY").then(|| "sk-test".to_string())
        })
        .unwrap();
        assert_eq!(openai.base_url, "http://config.local/v1");
        assert_eq!(openai.timeout, Duration::from_secs(120));
    }

    #[test]
    fn missing_key_error_names_configured_variable() {
        let err = provider_config(&custom_key_config(), |_| None).unwrap_err();
        assert!(err.to_string().contains("MY_KEY"), "{err}");
    }

    #[test]
    fn log_directive_precedence() {
        let mut config = ParleyConfig::default();
        config.logging.level = parley_config::LogLevel::Debug;

        let plain = cli::Args::try_parse_from(["parley"]).unwrap();
        assert_eq!(log_directive(&plain, None), "info");
        assert_eq!(log_directive(&plain, Some(&config)), "debug");

        let flagged = cli::Args::try_parse_from(["parley", "--log-level", "trace"]).unwrap();
        assert_eq!(log_directive(&flagged, Some(&config)), "trace");
    }
}
