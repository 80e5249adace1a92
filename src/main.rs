//! prodx - a terminal productivity tracker with live deadline countdowns.
//!
//! This is the main binary that loads configuration, sets up file logging,
//! and launches the dashboard.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use prodx_config::Config;
use prodx_protocol::{TaskStore, demo::demo_store};
use prodx_tui::{App, terminal};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[arg(
        long,
        env = "PRODX_CONFIG",
        help = "Configuration file (defaults to prodx.json5 or the user config directory)"
    )]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Start with sample tasks")]
    demo: bool,

    #[arg(long, help = "Log file (overrides the configured one)")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = Config::load_or_find(args.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(path) = args.log_file {
        config.logging.file = Some(path);
    }

    // Dropping the guard flushes buffered log lines
    let _log_guard = init_logging(&config)?;
    tracing::info!(demo = args.demo, "starting prodx");

    let store = if args.demo {
        demo_store(Utc::now())
    } else {
        TaskStore::new()
    };

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(store, config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Installs a file subscriber. Returns `None` when no log location exists.
fn init_logging(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let Ok(path) = config.logging.log_file() else {
        return Ok(None);
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .with_context(|| format!("invalid log filter `{}`", config.logging.filter))?;

    let (writer, guard) = tracing_appender::non_blocking(file_appender(&path)?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
