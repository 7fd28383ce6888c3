//! Runtime configuration
//!
//! Centralized configuration with:
//! - Config file loading (TOML, optional)
//! - Environment variable overrides
//! - Runtime defaults
//! - Validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Report and export configuration
    pub output: OutputConfig,

    /// Paths configuration
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json_export_path: PathBuf,
    pub csv_export_path: PathBuf,
    pub recent_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub log_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "ERROR".to_string(),
                format: "pretty".to_string(),
                output: "console".to_string(),
            },
            output: OutputConfig {
                json_export_path: PathBuf::from("myBook.json"),
                csv_export_path: PathBuf::from("myBook.csv"),
                recent_limit: 5,
            },
            paths: PathsConfig {
                log_directory: PathBuf::from("logs"),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment, file, and defaults
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        let config_paths = [
            PathBuf::from("book-catalog.toml"),
            PathBuf::from(".book-catalog.toml"),
            dirs::config_dir()
                .map(|d| d.join("book-catalog").join("config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                info!(config_file = %path.display(), "Loading configuration from file");
                config = Self::load_from_file(path)?;
                break;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        // Logging overrides
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        // Output overrides
        if let Ok(val) = env::var("BOOK_CATALOG_JSON_EXPORT") {
            self.output.json_export_path = PathBuf::from(val);
        }
        if let Ok(val) = env::var("BOOK_CATALOG_CSV_EXPORT") {
            self.output.csv_export_path = PathBuf::from(val);
        }
        if let Ok(val) = env::var("BOOK_CATALOG_RECENT_LIMIT") {
            self.output.recent_limit = val.parse().context("Invalid BOOK_CATALOG_RECENT_LIMIT")?;
        }

        // Path overrides
        if let Ok(val) = env::var("BOOK_CATALOG_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output.recent_limit == 0 {
            return Err(anyhow::anyhow!("Recent limit must be greater than 0"));
        }

        match self.logging.output.as_str() {
            "console" | "file" | "both" => {}
            other => {
                return Err(anyhow::anyhow!(
                    "Log output must be console, file or both, got {}",
                    other
                ));
            }
        }

        // File logging needs the directory in place before the appender opens.
        if self.logging.output != "console" && !self.paths.log_directory.exists() {
            fs::create_dir_all(&self.paths.log_directory)
                .context("Failed to create log directory")?;
        }

        Ok(())
    }
}

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration instance
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| Config::load().expect("Failed to load configuration"))
}
