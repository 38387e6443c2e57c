use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use stellarfeed::app::App;
use stellarfeed::cli::{Cli, CliHandler};

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let config_path = cli.config_path()?;

    // Handle CLI commands; logs go to stderr
    if let Some(command) = cli.command.take() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();

        let config = cli.load_config()?;
        return CliHandler::new(config, config_path)
            .handle_command(command)
            .await;
    }

    // Write logs to a file so they don't interfere with the TUI
    let log_path = log_file_path()?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_max_level(log_level)
        .init();

    if cli.debug {
        tracing::info!("Debug mode enabled - verbose logging active");
    }

    let config = cli.load_config()?;
    tracing::info!("Using API at {}", config.base_url);

    let mut app = App::new(config);
    app.run().await
}

/// `<data dir>/stellarfeed/stellarfeed.log`, created on demand
fn log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stellarfeed");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir.join("stellarfeed.log"))
}
