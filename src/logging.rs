//! Log setup
//!
//! The terminal belongs to the game, so logs go to a file. `RUST_LOG`
//! overrides the default filter.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "wordgrid=info";

/// Install the global subscriber writing to `path`
///
/// Keep the returned guard alive until exit; dropping it flushes the log.
///
/// # Errors
///
/// Returns an error if the log file path has no file name or a global
/// subscriber is already installed.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_without_file_name_rejected() {
        let err = init(Path::new("/")).unwrap_err();
        assert!(err.to_string().contains("has no file name"));
    }

    #[test]
    fn second_init_fails_once_installed() {
        let path = std::env::temp_dir().join("wordgrid-logging-test.log");

        let guard = init(&path).unwrap();
        tracing::info!("subscriber installed");

        let err = init(&path).unwrap_err();
        assert!(err.to_string().contains("failed to install log subscriber"));
        drop(guard);
    }
}
