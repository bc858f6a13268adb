use clap::Parser;

/// Parley — chat with an OpenAI-compatible model from the terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Model to use (overrides `session.model`).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Exchanges of history to keep (overrides `session.history_limit`).
    #[arg(long)]
    pub history_limit: Option<u32>,

    /// Sampling temperature (overrides `session.temperature`).
    #[arg(short = 't', long)]
    pub temperature: Option<f64>,

    /// Maximum tokens per reply (overrides `session.max_tokens`).
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "parley",
            "--model",
            "gpt-4o-mini",
            "--history-limit",
            "3",
            "-t",
            "0.2",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(args.history_limit, Some(3));
        assert_eq!(args.temperature, Some(0.2));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let args = Args::try_parse_from(["parley"]).unwrap();
        assert!(args.model.is_none());
        assert!(args.history_limit.is_none());
        assert!(args.max_tokens.is_none());
    }
}
