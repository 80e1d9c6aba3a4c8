//! File-based logging setup.
//!
//! The terminal is owned by the TUI while the application runs, so log output
//! goes to a file under the data directory instead of stdout.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_FILTER_ENV: &str = "IDPEEK_LOG";

const LOG_FILE_NAME: &str = "idpeek.log";

/// Initialize the file logger and return the guard that flushes it.
///
/// The guard must be kept alive for the duration of the program; dropping it
/// stops the background writer.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))
        .with_context(|| format!("failed to open log file in {}", log_dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(log_file);
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
