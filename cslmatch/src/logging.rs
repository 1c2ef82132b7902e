//! Logging infrastructure for cslmatch.
//!
//! Provides structured logging with file output and console output:
//! - Writes to `<log dir>/cslmatch.log` (cleared on session start)
//! - Also prints to stderr, keeping stdout free for command output
//! - Configurable via RUST_LOG environment variable
//! - `model_matching` turns on debug output for the matcher only

use std::fs;
use std::io;
use std::path::Path;

use time::format_description::well_known::Rfc3339;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILE_NAME;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Filter directives used when RUST_LOG is not set.
pub fn default_filter(model_matching: bool) -> String {
    if model_matching {
        "info,cslmatch::matching=debug".to_string()
    } else {
        "info".to_string()
    }
}

/// Initialize logging system.
///
/// Creates the log directory if needed, clears the previous log file,
/// and sets up output to both the file and stderr.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_dir: &Path, model_matching: bool) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Clear previous log file
    fs::write(log_dir.join(LOG_FILE_NAME), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_timer(LocalTime::new(Rfc3339));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_timer(LocalTime::new(Rfc3339));

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(model_matching)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
