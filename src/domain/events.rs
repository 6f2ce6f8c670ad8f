/// Milliseconds represented by one `AppEvent::Tick`.
///
/// The event source emits a tick whenever its input poll times out, so the
/// intro timer advances in these increments.
pub const TICK_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Stream(StreamEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool, alt: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            alt,
        }
    }
}

/// Progress of one streamed chat exchange, reported by the gateway task.
///
/// For a given submission the gateway emits `Opened` once the response
/// begins, any number of `Chunk`s in receipt order, and then exactly one of
/// `Closed` or `Failed`. A request that never reaches the gateway emits
/// `Failed` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    Opened,
    Chunk(String),
    Failed(String),
    Closed,
}
