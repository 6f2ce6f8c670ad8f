use super::{compose_state::ComposeState, intro_state::IntroState, transcript::Transcript};

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    IntroPlaying,
    AwaitingCredential,
    Chatting,
}

/// All mutable state of one chat session.
///
/// Owned by the session orchestrator; the rendering layer only ever sees a
/// shared reference and mutates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    running: bool,
    phase: SessionPhase,
    intro: IntroState,
    transcript: Transcript,
    credential: String,
    gate_input: ComposeState,
    compose: ComposeState,
    in_flight: bool,
}

impl SessionState {
    pub fn new(intro_duration_ms: u64) -> Self {
        Self {
            running: true,
            phase: SessionPhase::IntroPlaying,
            intro: IntroState::new(intro_duration_ms),
            transcript: Transcript::default(),
            credential: String::new(),
            gate_input: ComposeState::default(),
            compose: ComposeState::default(),
            in_flight: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
    }

    pub fn intro(&self) -> &IntroState {
        &self.intro
    }

    pub fn intro_mut(&mut self) -> &mut IntroState {
        &mut self.intro
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.is_empty()
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn set_credential(&mut self, credential: String) {
        self.credential = credential;
    }

    pub fn gate_input(&self) -> &ComposeState {
        &self.gate_input
    }

    pub fn gate_input_mut(&mut self) -> &mut ComposeState {
        &mut self.gate_input
    }

    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut ComposeState {
        &mut self.compose
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }
}
