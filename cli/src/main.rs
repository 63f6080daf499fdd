//! CLI entrypoint for estate-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use estate_application::{
    AnalysisGateway, CheckHealthUseCase, ConversationLogger, DispatchOutcome,
    DispatchQueryUseCase, Session,
};
use estate_domain::Entry;
use estate_infrastructure::{ConfigLoader, FileConfig, HttpAnalysisGateway, JsonlConversationLogger};
use estate_presentation::{Cli, ConsoleFormatter, OutputConfig, QuerySpinner, TuiApp, TuiConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration from files
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| *e)
            .context("Failed to load configuration")?
    };

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(&cli, &config)?;

    info!("Starting estate-chat");

    for issue in config.validate() {
        warn!("Config: {}", issue);
        eprintln!("Warning: {}", issue);
    }

    // === Dependency Injection ===
    let endpoint = cli.endpoint.as_deref().unwrap_or(&config.endpoint.url);
    let mut gateway = HttpAnalysisGateway::new(endpoint)?;
    if let Some(health_url) = &config.endpoint.health_url {
        gateway = gateway.with_health_url(health_url)?;
    }
    let gateway: Arc<dyn AnalysisGateway> = Arc::new(gateway);

    let output = OutputConfig {
        color: config.output.color && !cli.no_color,
        json: cli.json,
        show_progress: !cli.quiet && !cli.json,
    };
    if !output.color {
        ConsoleFormatter::disable_color();
    }

    // Health check mode
    if cli.health {
        let report = CheckHealthUseCase::new(gateway.clone()).execute().await?;
        print!(
            "{}",
            ConsoleFormatter::format_health(gateway.endpoint(), &report)
        );
        return Ok(if report.is_healthy() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut dispatcher = DispatchQueryUseCase::new(gateway);
    if let Some(logger) = open_transcript(&cli, &config) {
        dispatcher = dispatcher.with_conversation_logger(logger);
    }

    match cli.query {
        Some(query) => run_once(&dispatcher, query, output).await,
        None => {
            let tui_config =
                TuiConfig::from_millis_and_secs(config.tui.tick_ms, config.tui.flash_secs);
            let mut app = TuiApp::new(dispatcher).with_config(tui_config);
            app.run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One-shot mode: dispatch a single query and print the exchange
async fn run_once(
    dispatcher: &DispatchQueryUseCase,
    query: String,
    output: OutputConfig,
) -> Result<ExitCode> {
    let mut session = Session::new();
    session.set_input(query);

    let spinner = if output.show_progress {
        QuerySpinner::start(format!("Asking {}", dispatcher.endpoint()))
    } else {
        QuerySpinner::hidden()
    };
    let outcome = dispatcher.submit(&mut session).await;
    spinner.finish();

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) if e.is_silent_rejection() => {
            // Nothing was sent, so there is nothing to print
            debug!("Query not dispatched: {}", e);
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => bail!("{}", e),
    };

    for entry in session.log().iter() {
        if output.json {
            if matches!(entry, Entry::Bot(_)) {
                println!("{}", ConsoleFormatter::format_json(entry));
            }
        } else {
            println!("{}", ConsoleFormatter::format_entry(entry));
        }
    }

    Ok(match outcome {
        DispatchOutcome::Answered => ExitCode::SUCCESS,
        DispatchOutcome::ConnectivityError => ExitCode::FAILURE,
    })
}

/// Initialize tracing based on verbosity level.
///
/// The TUI owns the terminal, so in interactive mode logs go to a file
/// instead of stderr.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if !cli.is_interactive() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let Some(log_path) = tui_log_path(config) else {
        // Nowhere to write: stay silent rather than draw over the TUI
        return Ok(None);
    };
    let dir = log_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = log_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("estate-chat.log"));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Log file for TUI mode: configured path, or one per day in the data dir
fn tui_log_path(config: &FileConfig) -> Option<PathBuf> {
    if let Some(path) = &config.logging.log_file {
        return Some(path.clone());
    }
    let day = chrono::Local::now().format("%Y%m%d");
    ConfigLoader::data_dir().map(|dir| dir.join("logs").join(format!("estate-chat-{}.log", day)))
}

/// Open the JSONL transcript when requested by flag or config
fn open_transcript(cli: &Cli, config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    if !cli.transcript && !config.logging.transcript {
        return None;
    }

    let path = match &config.logging.transcript_path {
        Some(path) => path.clone(),
        None => {
            let Some(dir) = ConfigLoader::data_dir() else {
                warn!("No data directory; transcript disabled");
                return None;
            };
            JsonlConversationLogger::timestamped_path(&dir.join("transcripts"))
        }
    };

    match JsonlConversationLogger::open(&path) {
        Ok(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Some(Arc::new(logger))
        }
        Err(e) => {
            warn!("Could not open transcript {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> OutputConfig {
        OutputConfig {
            color: false,
            json: false,
            show_progress: false,
        }
    }

    fn dispatcher() -> DispatchQueryUseCase {
        // Port 9 (discard) is closed on test hosts: any request would fail
        let gateway = HttpAnalysisGateway::new("http://127.0.0.1:9/api/analyze/").unwrap();
        DispatchQueryUseCase::new(Arc::new(gateway))
    }

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[tokio::test]
    async fn test_blank_query_exits_quietly_without_a_request() {
        let code = run_once(&dispatcher(), "   ".to_string(), quiet())
            .await
            .unwrap();
        assert!(same_code(code, ExitCode::SUCCESS));
    }

    #[tokio::test]
    async fn test_unreachable_service_exits_with_failure() {
        let code = run_once(&dispatcher(), "Analyze Wakad".to_string(), quiet())
            .await
            .unwrap();
        assert!(same_code(code, ExitCode::FAILURE));
    }
}
