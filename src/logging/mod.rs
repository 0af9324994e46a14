//! Tracing subscriber initialization.
//!
//! Diagnostics (like a rejected custom pattern) go to a file so the TUI
//! stays clean; watch them with `tail -f` in another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Could not create the log directory.
    #[error("failed to create log directory {path:?}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name.
    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A tracing subscriber was already installed.
    #[error("tracing subscriber already initialized")]
    AlreadyInitialized,
}

/// Install a file-writing tracing subscriber.
///
/// Creates the log directory if needed. Respects `RUST_LOG`, defaulting
/// to `info`.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
