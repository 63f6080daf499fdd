//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for estate-chat
#[derive(Parser, Debug)]
#[command(name = "estate-chat")]
#[command(author, version, about = "Conversational client for real-estate market analysis")]
#[command(long_about = r#"
estate-chat sends free-text real-estate questions to an analysis service and
renders the reply (summary, chart, data table) in a terminal chat.

Without a query it starts the interactive TUI. With a query it runs once,
prints the reply and exits.

Configuration files are loaded from (in priority order):
1. ESTATE_CHAT_* environment variables (e.g. ESTATE_CHAT_ENDPOINT__URL)
2. --config <path>          Explicit config file
3. ./estate-chat.toml       Project-level config
4. ~/.config/estate-chat/config.toml   Global config

Example:
  estate-chat
  estate-chat "Show price growth for Akurdi"
  estate-chat --json "Compare demand trends of Aundh and Ambegaon Budruk"
  estate-chat --endpoint http://localhost:8000/api/analyze/ --health
"#)]
pub struct Cli {
    /// Query to run once (omit to start the interactive TUI)
    pub query: Option<String>,

    /// Analysis endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Check the service's health endpoint and exit
    #[arg(long)]
    pub health: bool,

    /// Print the reply as JSON (one-shot mode)
    #[arg(long)]
    pub json: bool,

    /// Write a JSONL transcript of the conversation
    #[arg(long)]
    pub transcript: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// True when no query was given and no one-shot action was requested
    pub fn is_interactive(&self) -> bool {
        self.query.is_none() && !self.health && !self.show_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_tui() {
        let cli = Cli::try_parse_from(["estate-chat"]).unwrap();
        assert!(cli.query.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn query_and_flags() {
        let cli = Cli::try_parse_from([
            "estate-chat",
            "--endpoint",
            "http://localhost:8000/api/analyze/",
            "--json",
            "-vv",
            "Analyze Wakad",
        ])
        .unwrap();
        assert_eq!(cli.query.as_deref(), Some("Analyze Wakad"));
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:8000/api/analyze/")
        );
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn health_is_not_interactive() {
        let cli = Cli::try_parse_from(["estate-chat", "--health"]).unwrap();
        assert!(!cli.is_interactive());
    }
}
