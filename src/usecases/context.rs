use tokio::runtime::Runtime;
use tracing_appender::non_blocking::WorkerGuard;

use crate::infra::config::AppConfig;

/// Everything the shell needs that outlives a single frame: configuration,
/// the async runtime the gateway exchange runs on, and the logging worker
/// guard (dropping it flushes the log file on exit).
pub struct AppContext {
    pub config: AppConfig,
    pub runtime: Runtime,
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, runtime: Runtime, log_guard: Option<WorkerGuard>) -> Self {
        Self {
            config,
            runtime,
            _log_guard: log_guard,
        }
    }
}
