//! Process configuration read once at start-up from a JSON file.
//!
//! The file holds a single object with PascalCase keys:
//!
//! ```json
//! {
//!   "EventId": "dalal-2026",
//!   "EventSecret": "s3cret",
//!   "LogFileName": "exchange.log",
//!   "LogMaxSize": 50,
//!   "LogLevel": "info",
//!   "DbUser": "exchange",
//!   "DbPassword": "pw",
//!   "DbHost": "localhost:3306",
//!   "DbName": "exchange"
//! }
//! ```
//!
//! Missing keys fall back to their defaults and unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Default file name looked up by [`Config::load_or_exit`] callers.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Default log file size, in megabytes, before rotation.
pub const DEFAULT_LOG_MAX_SIZE_MB: u64 = 50;

const LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration document
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path that was read
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// `LogLevel` is not one of `debug`, `info`, `warn`, `error`
    #[error("invalid log level '{0}', expected one of debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// All configuration options of the exchange process.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    /// Identifier of the trading event on the external event API
    pub event_id: String,
    /// Secret shared with the external event API
    pub event_secret: String,

    /// Log file path; empty logs to stdout
    pub log_file_name: String,
    /// Size in megabytes after which the log file is rotated
    pub log_max_size: u64,
    /// One of `debug`, `info`, `warn`, `error`
    pub log_level: String,

    /// Database user name
    pub db_user: String,
    /// Database password
    pub db_password: String,
    /// Database host, optionally with port
    pub db_host: String,
    /// Database name
    pub db_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_id: String::new(),
            event_secret: String::new(),
            log_file_name: String::new(),
            log_max_size: DEFAULT_LOG_MAX_SIZE_MB,
            log_level: "info".to_string(),
            db_user: String::new(),
            db_password: String::new(),
            db_host: String::new(),
            db_name: String::new(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("event_id", &self.event_id)
            .field("event_secret", &"<redacted>")
            .field("log_file_name", &self.log_file_name)
            .field("log_max_size", &self.log_max_size)
            .field("log_level", &self.log_level)
            .field("db_user", &self.db_user)
            .field("db_password", &"<redacted>")
            .field("db_host", &self.db_host)
            .field("db_name", &self.db_name)
            .finish()
    }
}

impl Config {
    /// Read and validate the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Open`] if the file cannot be opened,
    /// [`ConfigError::Parse`] if it is not a valid document and
    /// [`ConfigError::InvalidLogLevel`] for an unknown `LogLevel`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration document held in memory.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], minus the open failure.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<memory>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration or terminate the process.
    ///
    /// A missing or malformed file is fatal: the error is logged and the
    /// process exits with status 1.
    pub fn load_or_exit(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => {
                info!(path = %path.as_ref().display(), ?config, "configuration loaded");
                config
            }
            Err(err) => {
                error!("cannot proceed without configuration: {err}");
                eprintln!("cannot proceed without configuration: {err}");
                std::process::exit(1);
            }
        }
    }

    /// Log level name, lower-cased.
    #[must_use]
    pub fn log_level(&self) -> String {
        self.log_level.to_ascii_lowercase()
    }

    /// Maximum log file size in bytes.
    #[must_use]
    pub fn log_max_bytes(&self) -> u64 {
        self.log_max_size.saturating_mul(1024 * 1024)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}
