use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, SessionOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn SessionOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        gateway = %context.config.gateway.base_url,
        intro_ms = context.config.intro.duration_ms,
        "starting chat shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{events::AppEvent, session_state::SessionState},
        ui::event_source::MockEventSource,
        usecases::{
            session::DefaultSessionOrchestrator,
            submit_chat::{ChatDispatcher, OutboundChat},
        },
    };

    struct NoopDispatcher;

    impl ChatDispatcher for NoopDispatcher {
        fn dispatch(&self, _chat: OutboundChat) {}
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn orchestrator_stops_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut orchestrator =
            DefaultSessionOrchestrator::new(SessionState::new(12_000), NoopDispatcher);

        if let Some(event) = source.next_event().expect("must read mock event") {
            orchestrator
                .handle_event(event)
                .expect("must handle quit event");
        }

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn exhausted_mock_source_yields_no_event() {
        let mut source = MockEventSource::from(vec![]);

        assert_eq!(source.next_event().expect("must read"), None);
    }
}
