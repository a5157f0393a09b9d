use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "TASKLET_LOG";

const DEFAULT_DIRECTIVE: &str = "tasklet=info";

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install log subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Pick the filter: `TASKLET_LOG` wins, then the configured level, then the default
pub fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_DIRECTIVE)))
}

/// Send tracing output to `file` (appending). The terminal is owned by the
/// UI, so with no file nothing is installed and events are dropped.
pub fn init_logging(file: Option<&Path>, level: Option<&str>) -> Result<(), LogError> {
    let Some(path) = file else {
        return Ok(());
    };
    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(writer)),
        )
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_file_installs_nothing() {
        assert!(init_logging(None, None).is_ok());
    }

    #[test]
    fn unopenable_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("log.txt");
        let err = init_logging(Some(&path), None).unwrap_err();
        assert!(matches!(err, LogError::OpenError { .. }));
    }
}
