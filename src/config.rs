use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SniffrConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Classification service endpoint (single fixed JSON POST)
    pub endpoint: String,

    /// Request timeout in seconds; 0 disables the timeout
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Splash screen duration before the Intro page, in milliseconds
    pub splash_ms: u64,

    /// Keyword bars shown on the Result page
    pub max_keywords: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Pending-content handoff slot (shared with the capture commands)
    pub slot_path: PathBuf,
}

impl Default for SniffrConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                endpoint: "http://127.0.0.1:1234/api/process".to_string(),
                timeout_seconds: 0,
            },
            ui: UiConfig {
                splash_ms: 1500,
                max_keywords: 10,
            },
            storage: StorageConfig {
                slot_path: PathBuf::from(".sniffr/pending.json"),
            },
        }
    }
}

impl SniffrConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow!("Failed to read config file: {}", e))?;

        let config: SniffrConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    pub fn load_from_env() -> Self {
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(endpoint) = std::env::var("SNIFFR_ENDPOINT") {
            config.api.endpoint = endpoint;
        }

        if let Ok(timeout) = std::env::var("SNIFFR_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse::<u64>() {
                config.api.timeout_seconds = value;
            }
        }

        if let Ok(splash) = std::env::var("SNIFFR_SPLASH_MS") {
            if let Ok(value) = splash.parse::<u64>() {
                config.ui.splash_ms = value;
            }
        }

        if let Ok(slot) = std::env::var("SNIFFR_SLOT_PATH") {
            config.storage.slot_path = PathBuf::from(slot);
        }

        config
    }

    /// Load a config file if present, otherwise defaults + env overrides
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::load_from_env()),
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| anyhow!("Failed to write config file: {}", e))?;

        Ok(())
    }
}
