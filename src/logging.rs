use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::error::{SniffrError, SniffrResult};

/// Logging configuration for SNIFFR
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
    pub enable_file_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            enable_file_logging: true,
        }
    }
}

/// Initialize the logging system for SNIFFR.
///
/// While the TUI is running all output goes to the rolling log file; the
/// console layer is sunk so log lines can't corrupt the alternate screen.
/// The returned guard must stay alive for the non-blocking writer to flush.
pub fn init_logging(config: &LoggingConfig) -> SniffrResult<Option<WorkerGuard>> {
    if config.enable_file_logging {
        fs::create_dir_all(&config.log_dir)
            .map_err(|e| SniffrError::file_io(config.log_dir.to_string_lossy().to_string(), e))?;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Keep reqwest/hyper chatter out of the log at the default level
        EnvFilter::new(&format!(
            "sniffr_tui={},reqwest=warn,hyper=warn,{}",
            config.level, config.level
        ))
    });

    let registry = Registry::default().with(env_filter);

    let guard = if config.enable_file_logging {
        let file_appender = rolling::daily(&config.log_dir, "sniffr.log");
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .boxed();

        // Console disabled while the TUI owns the terminal
        let console_layer = fmt::layer()
            .with_writer(std::io::sink)
            .with_target(false)
            .without_time()
            .compact()
            .boxed();

        registry.with(file_layer).with(console_layer).init();
        Some(guard)
    } else {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .boxed();

        registry.with(console_layer).init();
        None
    };

    info!("🐶 SNIFFR logging initialized");
    info!("Log level: {}", config.level);

    if config.enable_file_logging {
        info!("File logging enabled: {}", config.log_dir.display());
    }

    Ok(guard)
}

/// Log system information for debugging
pub fn log_system_info() {
    info!("🐶 SNIFFR v1.0 - Real/Fake News Sniffer");
    info!("System: {} {}", std::env::consts::OS, std::env::consts::ARCH);

    if let Ok(cwd) = std::env::current_dir() {
        info!("Working directory: {}", cwd.display());
    }
}
