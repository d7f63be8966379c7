//! Tracing subscriber setup.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var naming a log file; overrides `logging.file`.
pub const LOG_FILE_ENV: &str = "SOCIALSYNC_LOG";

/// Initialize tracing with file output.
///
/// Logging is disabled unless a file is configured, either through
/// `SOCIALSYNC_LOG` or `logging.file`. `RUST_LOG` takes precedence over
/// `logging.filter`. Calling this more than once keeps the first subscriber.
pub fn init_tracing(config: &LoggingConfig) {
    let Some(log_path) = resolve_log_path(config) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        eprintln!("Warning: Failed to open log file: {}", log_path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

fn resolve_log_path(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}
