//! Configuration loading and runtime paths.
//!
//! Spindle reads `spindle.toml` from the working directory (or
//! `$SPINDLE_CONFIG_PATH`), then applies environment overrides.
//! Precedence: env vars > config file > defaults. A missing file is not
//! an error — every key has a default, and the common case is running
//! with no file at all.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::dialogue::router::DEFAULT_SIMILARITY_THRESHOLD;

/// Errors from configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for our schema.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The home directory could not be determined.
    #[error("cannot determine home directory")]
    HomeDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpindleConfig {
    /// Matching engine tuning.
    pub engine: EngineConfig,
    /// Chat host settings.
    pub chat: ChatConfig,
}

/// Matching engine tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum similarity score (exclusive) for a topic match.
    pub similarity_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Chat host settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Where the session context is persisted between runs.
    /// Defaults to `~/.spindle/context.json`.
    pub context_file: Option<PathBuf>,
    /// Where session logs are written. Defaults to `~/.spindle/logs`.
    pub logs_dir: Option<PathBuf>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            context_file: None,
            logs_dir: None,
        }
    }
}

impl SpindleConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from the TOML file only, no env overrides.
    fn load_from_file() -> Result<Self, ConfigError> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                Self::parse(&contents, &path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Parse TOML contents, attributing errors to `path`.
    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Resolve config file path using a custom env resolver (testable).
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        env("SPINDLE_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("spindle.toml"))
    }

    /// Apply environment variable overrides.
    ///
    /// Takes a resolver function so tests can inject values without
    /// touching the process environment.
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(value) = env("SPINDLE_SIMILARITY_THRESHOLD") {
            match value.parse() {
                Ok(threshold) => self.engine.similarity_threshold = threshold,
                Err(_) => warn!(
                    var = "SPINDLE_SIMILARITY_THRESHOLD",
                    value = %value,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(value) = env("SPINDLE_LOG_LEVEL") {
            self.chat.log_level = value;
        }
        if let Some(value) = env("SPINDLE_CONTEXT_FILE") {
            self.chat.context_file = Some(PathBuf::from(value));
        }
        if let Some(value) = env("SPINDLE_LOGS_DIR") {
            self.chat.logs_dir = Some(PathBuf::from(value));
        }
    }

    /// Context file path, falling back to `~/.spindle/context.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the home directory
    /// cannot be determined.
    pub fn context_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.chat.context_file {
            Some(path) => Ok(path.clone()),
            None => Ok(runtime_dir()?.join("context.json")),
        }
    }

    /// Logs directory, falling back to `~/.spindle/logs`.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the home directory
    /// cannot be determined.
    pub fn logs_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.chat.logs_dir {
            Some(path) => Ok(path.clone()),
            None => Ok(runtime_dir()?.join("logs")),
        }
    }
}

/// Resolve the default runtime directory (`~/.spindle/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn runtime_dir() -> Result<PathBuf, ConfigError> {
    let home = directories::BaseDirs::new().ok_or(ConfigError::HomeDir)?;
    Ok(home.home_dir().join(".spindle"))
}
