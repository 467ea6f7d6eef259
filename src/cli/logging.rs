//! Tracing subscriber setup driven by the verbosity flags.

use crate::cli::Cli;
use crate::error::LlmwlError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn log_level(cli: &Cli) -> Level {
    if cli.is_debug() {
        Level::TRACE
    } else if cli.is_verbose() {
        Level::DEBUG
    } else if cli.quiet || cli.json {
        // Keep stderr quiet when the report is meant for another program.
        Level::ERROR
    } else {
        Level::INFO
    }
}

/// Install the global subscriber. Logs go to stderr so the report on stdout
/// stays clean.
pub fn initialize_logging(cli: &Cli) -> Result<(), LlmwlError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(cli.should_use_color())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LlmwlError::ConfigError(format!("Failed to initialize logging: {}", e)))
}
