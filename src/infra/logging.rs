use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Initializes tracing with a non-blocking file writer.
///
/// The TUI owns the terminal, so log output goes to a file instead of
/// stderr. The returned guard must be held for the process lifetime or
/// buffered lines are lost.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let appender = tracing_appender::rolling::never(".", &config.file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}
