use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use glissade_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "glissade")]
#[command(author, version, about = "An animated slide carousel for the terminal")]
struct Cli {
    /// Config file to use instead of ~/.config/glissade/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show slides in the terminal (default)
    Run {
        /// Slide files; each file becomes one slide
        files: Vec<PathBuf>,
        /// Do not start autoplay
        #[arg(long)]
        no_autoplay: bool,
    },
    /// Autoplay slides headless, logging each step, and exit at the last slide
    Play {
        /// Slide files; each file becomes one slide
        files: Vec<PathBuf>,
        /// Autoplay period in milliseconds
        #[arg(short, long)]
        interval_ms: Option<u64>,
    },
    /// List the slides that would be shown
    List {
        /// Slide files; each file becomes one slide
        files: Vec<PathBuf>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default configuration with sample slides
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let config = Arc::new(config);

    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run { files, no_autoplay }) => {
            commands::run::run(config, &files, no_autoplay).await
        }
        None => commands::run::run(config, &[], false).await,
        Some(Commands::Play { files, interval_ms }) => {
            commands::play::run(config, &files, interval_ms).await
        }
        Some(Commands::List { files }) => commands::list::run(&config, &files),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}

/// RUST_LOG wins over the configured level. The TUI owns the terminal, so
/// its logs go to a file in the data directory; everything else logs to stderr.
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if tui {
        let log_path = config.log_path();
        let file = open_log_file(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
