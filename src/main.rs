use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use sniffr_tui::cli;
use sniffr_tui::config::SniffrConfig;
use sniffr_tui::logging::{init_logging, log_system_info, LoggingConfig};

#[derive(Parser)]
#[command(name = "sniffr")]
#[command(about = "🐶 SNIFFR - Fake news sniffer with a terminal panel")]
#[command(version)]
struct Cli {
    /// Path to a sniffr.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze content directly without opening the panel
    Analyze {
        /// Text to classify
        #[arg(long)]
        text: Option<String>,

        /// Image URL to classify
        #[arg(long)]
        image: Option<String>,
    },

    /// Capture text into the pending slot
    CaptureText {
        /// The highlighted text
        text: String,
    },

    /// Capture an image URL into the pending slot
    CaptureImage {
        /// The image URL
        url: String,
    },

    /// Show endpoint and pending-slot status
    Status,

    /// Write a default configuration file
    ConfigInit {
        /// Where to write it (default: sniffr.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // File logging only when the panel owns the terminal
    let opening_panel = cli.command.is_none();
    let logging_config = LoggingConfig {
        level: if cli.verbose { "debug".to_string() } else { "info".to_string() },
        enable_file_logging: opening_panel,
        ..LoggingConfig::default()
    };
    let _guard = init_logging(&logging_config)?;
    log_system_info();

    let config = SniffrConfig::load_or_default(cli.config.as_deref())?;
    info!("Using endpoint: {}", config.api.endpoint);

    match cli.command {
        Some(Commands::Analyze { text, image }) => cli::analyze_command(text, image, &config).await,
        Some(Commands::CaptureText { text }) => cli::capture_text_command(text, &config),
        Some(Commands::CaptureImage { url }) => cli::capture_image_command(url, &config),
        Some(Commands::Status) => cli::status_command(&config),
        Some(Commands::ConfigInit { output }) => cli::config_init_command(output, &config),
        None => run_panel(config).await,
    }
}

#[cfg(feature = "tui")]
async fn run_panel(config: SniffrConfig) -> Result<()> {
    sniffr_tui::tui::run_tui(config).await
}

#[cfg(not(feature = "tui"))]
async fn run_panel(_config: SniffrConfig) -> Result<()> {
    Err(anyhow::anyhow!(
        "This build has no TUI support; use the subcommands instead"
    ))
}
