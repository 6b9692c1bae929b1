//! Logging setup
//!
//! The interactive view owns the whole screen, so log output goes to a file
//! in the log directory instead of stdout. `RUST_LOG` selects the level
//! (default `info`).

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::Result;

/// Log file name inside the log directory
pub const LOG_FILE: &str = "qfind.log";

/// Initialize file logging. The returned guard must be held until exit,
/// otherwise buffered lines are lost.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(env_filter);

    // A second init (tests, repeated runs in one process) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs").join("qfind");
        assert!(!log_dir.exists());

        let guard = init(&log_dir).unwrap();
        assert!(log_dir.is_dir());
        drop(guard);
    }

    #[test]
    fn test_init_fails_when_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(init(file.path()).is_err());
    }
}
