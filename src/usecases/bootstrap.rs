use std::{path::Path, sync::mpsc};

use tokio::runtime::Builder;

use crate::{
    domain::session_state::SessionState,
    gateway::client::HttpChatDispatcher,
    infra::{self, error::AppError},
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, SessionOrchestrator},
        session::DefaultSessionOrchestrator,
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::loader::load(config_path)?;
    let log_guard = infra::logging::init(&config.logging)?;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::RuntimeInit)?;

    Ok(AppContext::new(config, runtime, Some(log_guard)))
}

pub struct ShellParts {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn SessionOrchestrator>,
}

/// Wires the stream-event channel between the gateway dispatcher and the
/// event source, and seats the orchestrator over a fresh session.
pub fn compose_shell(context: &AppContext) -> ShellParts {
    let (stream_tx, stream_rx) = mpsc::channel();

    let dispatcher = HttpChatDispatcher::new(
        context.runtime.handle().clone(),
        &context.config.gateway,
        &context.config.chat,
        stream_tx,
    );

    let orchestrator = DefaultSessionOrchestrator::new(
        SessionState::new(context.config.intro.duration_ms),
        dispatcher,
    );

    ShellParts {
        event_source: Box::new(CrosstermEventSource::new(stream_rx)),
        orchestrator: Box::new(orchestrator),
    }
}
