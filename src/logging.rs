//! Log Output
//!
//! Installs the global `tracing` subscriber for the native binaries from
//! [`LoggingConfig`]. `RUST_LOG` wins over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Logging setup errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {error}")]
    File { path: String, error: std::io::Error },

    #[error("Failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Filter directives for a configured level
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the subscriber: pretty or json lines, to stderr or the configured file
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let writer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| LoggingError::File {
                    path: path.clone(),
                    error,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let fmt = tracing_subscriber::fmt::layer().with_writer(writer);
    let layer = if config.format.eq_ignore_ascii_case("json") {
        fmt.json().boxed()
    } else {
        fmt.boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter_for(&config.level))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bad_log_file_path() {
        let dir = tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("missing").join("log.txt").to_string_lossy().to_string()),
            ..Default::default()
        };

        let err = init(&config).unwrap_err();
        assert!(matches!(err, LoggingError::File { .. }));
    }
}
