//! Structured logging set up from the process configuration.

use crate::config::Config;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoggingError {
    /// The log file could not be opened or rotated
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A global subscriber is already installed
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Install the global `tracing` subscriber described by `config`.
///
/// The level comes from `LogLevel` unless `RUST_LOG` is set. An empty
/// `LogFileName` logs to stdout; otherwise lines are appended to that file,
/// which is rotated to `<name>.1` once it grows past `LogMaxSize` megabytes.
///
/// # Errors
///
/// Returns [`LoggingError::LogFile`] if the log file cannot be opened and
/// [`LoggingError::Init`] if a subscriber was already installed.
pub fn setup_logger(config: &Config) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.log_file_name.is_empty() {
        registry.with(fmt::layer()).try_init()
    } else {
        let path = PathBuf::from(&config.log_file_name);
        let writer = RotatingFile::open(&path, config.log_max_bytes())
            .map_err(|source| LoggingError::LogFile { path, source })?;
        registry
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(writer)))
            .try_init()
    };
    installed.map_err(|e| LoggingError::Init(e.to_string()))
}

/// Append-only log file that moves itself aside once it reaches a size limit.
///
/// Only one backup (`<name>.1`) is kept; a rotation replaces the previous one.
/// A limit of zero disables rotation.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    written: u64,
    file: File,
}

impl RotatingFile {
    /// Open `path` for appending, creating it when missing.
    ///
    /// # Errors
    ///
    /// Propagates the I/O error from opening the file or reading its size.
    pub fn open(path: impl AsRef<Path>, max_bytes: u64) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            written,
            file,
        })
    }

    /// Path of the single backup kept after a rotation.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".1");
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        std::fs::rename(&self.path, self.backup_path())?;
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.max_bytes > 0
            && self.written > 0
            && self.written.saturating_add(buf.len() as u64) > self.max_bytes
        {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written = self.written.saturating_add(n as u64);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
