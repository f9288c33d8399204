//! Address Book Bot - Main entry point
//!
//! Reads commands from stdin and answers on stdout until `close`/`exit` or
//! end of input. Logs go to stderr.

use address_book_bot::views::View;
use address_book_bot::{
    run_session, Assistant, Config, ConsoleView, JsonFileRepository, JsonView, OutputFormat,
};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the log filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Initialize logging (stderr only so stdout carries just the conversation)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        path = %config.book_file.display(),
        window_days = config.birthday_window_days,
        mode = %config.birthday_match,
        "Starting address book assistant"
    );

    match config.output {
        OutputFormat::Text => serve(&config, ConsoleView::stdout(), io::stdout()),
        // Keep stdout pure JSON lines: no interactive prompt
        OutputFormat::Json => serve(&config, JsonView::new(io::stdout()), io::sink()),
    }
}

fn serve<V: View, P: Write>(config: &Config, view: V, prompt: P) -> Result<()> {
    let repository = JsonFileRepository::new(&config.book_file);

    let assistant = Assistant::start(repository, view, config.birthday_window())
        .with_context(|| format!("Failed to open {}", config.book_file.display()))?;

    let stdin = io::stdin();
    run_session(assistant, stdin.lock(), prompt).context("Session aborted")?;

    info!("Address book assistant shutdown complete");
    Ok(())
}
