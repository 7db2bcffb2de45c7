//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then `UK_POSTCODES_*` environment variables. Command-line flags are
//! applied last by the CLI through the `with_*` builders, after which the
//! result is validated once.

use crate::constants::{
    DEFAULT_CHUNK_SIZE, ENV_CHUNK_SIZE, ENV_CSV_PATH, ENV_LOG_LEVEL, ENV_STORE_PATH,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub import: ImportConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Bulk import settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportConfig {
    /// Records committed per chunk
    pub chunk_size: usize,

    /// Show a progress spinner while importing
    pub show_progress: bool,

    /// Source file to import at startup; absent or blank skips the import
    pub csv_path: Option<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            show_progress: true,
            csv_path: None,
        }
    }
}

impl ImportConfig {
    /// The configured source path, if present and not blank
    pub fn source_path(&self) -> Option<PathBuf> {
        self.csv_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

/// Store settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// JSON snapshot backing the in-memory store; none keeps data in memory only
    pub snapshot_path: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load defaults, an optional config file and environment overrides
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        Self::load_layered_with(config_file, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load_layered`], reading variables through `lookup`
    pub fn load_layered_with<F>(config_file: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(lookup)
    }

    /// Read a JSON config file; missing sections fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(csv_path) = lookup(ENV_CSV_PATH) {
            self.import.csv_path = Some(csv_path);
        }

        if let Some(chunk_size) = lookup(ENV_CHUNK_SIZE) {
            self.import.chunk_size = chunk_size.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_CHUNK_SIZE, chunk_size
                ))
            })?;
        }

        if let Some(store_path) = lookup(ENV_STORE_PATH) {
            self.store.snapshot_path = Some(PathBuf::from(store_path));
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Set the source file to import at startup
    pub fn with_csv_path(mut self, csv_path: impl Into<String>) -> Self {
        self.import.csv_path = Some(csv_path.into());
        self
    }

    /// Set the number of records per chunk
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.import.chunk_size = chunk_size;
        self
    }

    /// Set the snapshot file backing the store
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.snapshot_path = Some(path.into());
        self
    }

    /// Disable the import progress spinner
    pub fn without_progress(mut self) -> Self {
        self.import.show_progress = false;
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.import.chunk_size == 0 {
            return Err(Error::configuration("Chunk size must be greater than 0"));
        }

        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}', expected one of {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
