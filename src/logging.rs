//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive runs log to a file. `--once` runs log
//! to stderr, and only when a filter was asked for explicitly.

use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::{FactConfig, DEFAULT_LOG_FILTER};

/// Parse a filter directive, falling back to the default on syntax errors.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Send log output to the configured file, creating parent directories.
///
/// Returns the path written to, or `None` when there is nowhere to put the
/// file. A subscriber that is already installed is left in place.
pub fn init_file_logging(config: &FactConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_path() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(Some(path))
}

/// Like [`init_file_logging`], but a log file that cannot be opened is not
/// fatal: a warning goes to `warn` and the app runs without a subscriber.
pub fn init_file_logging_or_warn<W: Write>(config: &FactConfig, warn: &mut W) -> Option<PathBuf> {
    match init_file_logging(config) {
        Ok(path) => path,
        Err(e) => {
            let _ = writeln!(warn, "Warning: logging disabled: {}", e);
            None
        }
    }
}

/// Log to stderr for non-interactive runs.
pub fn init_stderr_logging(config: &FactConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
