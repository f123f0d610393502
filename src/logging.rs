//! File-based `tracing` setup. The terminal is owned by the UI, so log
//! output never goes to stdout or stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Install the global subscriber when a log file is configured. `RUST_LOG`
/// overrides the configured level. Returns whether a subscriber was installed.
pub fn init(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::FileOpen {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(true)
}
