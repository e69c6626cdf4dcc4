use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod tui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("stock error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = stock_config::StockConfig::load_with_dotenv()
        .context("failed to load stockroom configuration")?;

    let log_target = if matches!(cli.command, cli::Commands::Ui) {
        LogTarget::File(config.logging.resolved_file())
    } else {
        LogTarget::Stderr
    };
    init_tracing(flags.default_log_level(), &log_target)?;
    context::warn_unconfigured(&config);

    let ctx = context::AppContext::init(config)
        .await
        .context("failed to open the item store")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Where log events are written.
enum LogTarget {
    Stderr,
    /// The terminal UI owns the screen; `None` discards logs.
    File(Option<std::path::PathBuf>),
}

fn init_tracing(level: &str, target: &LogTarget) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("STOCK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(Some(path)) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
        }
        LogTarget::File(None) => builder.with_writer(std::io::sink).try_init(),
    };

    installed
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

fn open_log_file(path: &Path) -> anyhow::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
