use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uniflow::config::{Config, LogConfig};
use uniflow::ui::runtime;

#[derive(Debug, Parser)]
#[command(
    name = "uniflow",
    version,
    about = "Alerts & action sheets demo for unidirectional TUI state management"
)]
struct Args {
    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the event-loop tick rate in milliseconds.
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Write logs to this file (overrides [log].file).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    if let Some(ms) = args.tick_rate {
        config.ui.tick_rate_ms = ms;
    }
    if let Some(path) = args.log_file {
        config.log.file = Some(path);
    }
    config.validate()?;

    init_tracing(&config.log)?;

    runtime::run(config).context("UI runtime failed")?;
    Ok(())
}

/// Set up file-based logging.
///
/// The terminal belongs to the TUI, so logs never go to stdout/stderr.
/// Without a configured log file the subscriber is not installed at all.
fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let Some(path) = &log.file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let default_filter = log.filter.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Arc::new(file))
        .init();

    Ok(())
}
