use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput, StreamEvent, TICK_INTERVAL_MS},
    intro_state::IntroSignal,
    session_state::{SessionPhase, SessionState},
};

use super::{
    contracts::SessionOrchestrator,
    submit_chat::{prepare_submission, ChatDispatcher, SubmitChatCommand},
};

const SUBMISSION_ACCEPTED: &str = "CHAT_SUBMISSION_ACCEPTED";
const STRAY_STREAM_EVENT: &str = "CHAT_STRAY_STREAM_EVENT";
const EXCHANGE_SETTLED: &str = "CHAT_EXCHANGE_SETTLED";

/// Orchestrates one chat session: intro sequencing, the credential gate,
/// submission admission, and application of stream events to the
/// transcript. The sole owner and mutator of `SessionState`.
pub struct DefaultSessionOrchestrator<D: ChatDispatcher> {
    state: SessionState,
    dispatcher: D,
}

impl<D: ChatDispatcher> DefaultSessionOrchestrator<D> {
    pub fn new(state: SessionState, dispatcher: D) -> Self {
        Self { state, dispatcher }
    }

    fn handle_intro_key(&mut self) {
        if self.state.intro_mut().skip() == IntroSignal::Completed {
            self.enter_post_intro_phase();
        }
    }

    fn enter_post_intro_phase(&mut self) {
        let phase = if self.state.has_credential() {
            SessionPhase::Chatting
        } else {
            SessionPhase::AwaitingCredential
        };
        self.state.set_phase(phase);
    }

    fn handle_gate_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "enter" => {
                let credential = self.state.gate_input_mut().take_trimmed();
                if !credential.is_empty() {
                    self.state.set_credential(credential);
                    self.state.set_phase(SessionPhase::Chatting);
                }
            }
            // Cancelling only makes sense once a key is already held.
            "esc" => {
                if self.state.has_credential() {
                    self.state.gate_input_mut().clear();
                    self.state.set_phase(SessionPhase::Chatting);
                }
            }
            "backspace" => self.state.gate_input_mut().delete_char_before(),
            "delete" => self.state.gate_input_mut().delete_char_at(),
            "left" => self.state.gate_input_mut().move_cursor_left(),
            "right" => self.state.gate_input_mut().move_cursor_right(),
            "home" => self.state.gate_input_mut().move_cursor_home(),
            "end" => self.state.gate_input_mut().move_cursor_end(),
            other => {
                if let Some(ch) = single_char(other) {
                    self.state.gate_input_mut().insert_char(ch);
                }
            }
        }
    }

    fn handle_chat_key(&mut self, key: KeyInput) {
        if key.ctrl && key.key == "k" {
            self.state.gate_input_mut().clear();
            self.state.set_phase(SessionPhase::AwaitingCredential);
            return;
        }

        // The compose box is disabled for the whole in-flight window; the
        // disabled box is the admission control against a second exchange.
        if self.state.in_flight() {
            return;
        }

        match key.key.as_str() {
            "enter" if key.alt => {
                self.state.compose_mut().insert_newline();
            }
            "enter" => self.submit(),
            "backspace" => self.state.compose_mut().delete_char_before(),
            "delete" => self.state.compose_mut().delete_char_at(),
            "left" => self.state.compose_mut().move_cursor_left(),
            "right" => self.state.compose_mut().move_cursor_right(),
            "home" => self.state.compose_mut().move_cursor_home(),
            "end" => self.state.compose_mut().move_cursor_end(),
            other => {
                if let Some(ch) = single_char(other) {
                    self.state.compose_mut().insert_char(ch);
                }
            }
        }
    }

    fn submit(&mut self) {
        let command = SubmitChatCommand {
            message: self.state.compose().text().to_owned(),
            credential: self.state.credential().to_owned(),
        };

        // Rejections are silent: the compose box keeps its text and the
        // transcript is untouched.
        let outbound = match prepare_submission(command) {
            Ok(outbound) => outbound,
            Err(_) => return,
        };

        tracing::info!(
            code = SUBMISSION_ACCEPTED,
            message_chars = outbound.user_message.chars().count(),
            "chat submission accepted"
        );

        self.state.compose_mut().clear();
        self.state.transcript_mut().push_user(&outbound.user_message);
        self.state.set_in_flight(true);
        self.dispatcher.dispatch(outbound);
    }

    fn apply_stream_event(&mut self, event: StreamEvent) {
        if !self.state.in_flight() {
            tracing::warn!(
                code = STRAY_STREAM_EVENT,
                event = ?event,
                "stream event arrived with no exchange in flight; ignoring"
            );
            return;
        }

        match event {
            StreamEvent::Opened => self.state.transcript_mut().open_assistant(),
            StreamEvent::Chunk(text) => {
                if !self.state.transcript_mut().append_streamed(&text) {
                    tracing::warn!(
                        code = STRAY_STREAM_EVENT,
                        "chunk arrived before the reply opened; dropping"
                    );
                }
            }
            StreamEvent::Failed(error) => {
                let notice = failure_notice(&error);
                self.state.transcript_mut().fail_streamed(&notice);
                self.settle("failed");
            }
            StreamEvent::Closed => {
                self.state.transcript_mut().close_assistant();
                self.settle("completed");
            }
        }
    }

    fn settle(&mut self, outcome: &'static str) {
        self.state.set_in_flight(false);
        tracing::info!(code = EXCHANGE_SETTLED, outcome, "chat exchange settled");
    }
}

impl<D: ChatDispatcher> SessionOrchestrator for DefaultSessionOrchestrator<D> {
    fn state(&self) -> &SessionState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {
                if self.state.phase() == SessionPhase::IntroPlaying
                    && self.state.intro_mut().advance(TICK_INTERVAL_MS) == IntroSignal::Completed
                {
                    self.enter_post_intro_phase();
                }
            }
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::Stream(stream_event) => self.apply_stream_event(stream_event),
            AppEvent::InputKey(key) => match self.state.phase() {
                SessionPhase::IntroPlaying => self.handle_intro_key(),
                SessionPhase::AwaitingCredential => self.handle_gate_key(key),
                SessionPhase::Chatting => self.handle_chat_key(key),
            },
        }

        Ok(())
    }
}

/// Builds the diagnostic shown in the transcript when an exchange fails.
/// Embeds the underlying error text plus remediation hints.
pub fn failure_notice(error: &str) -> String {
    format!(
        "TRANSMISSION FAILED: {error}\n\n\
         Please check:\n\
         1. Your access key is correct\n\
         2. The gateway is running on its configured port\n\
         3. Your connection is stable\n\n\
         May the Force help you debug this issue."
    )
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
