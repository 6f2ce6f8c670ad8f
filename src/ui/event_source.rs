use std::{sync::mpsc::Receiver, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput, StreamEvent, TICK_INTERVAL_MS},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Merges keyboard input and gateway stream events into one event feed.
///
/// Stream events are drained first so transcript growth renders on the very
/// next frame instead of waiting out an input poll.
pub struct CrosstermEventSource {
    stream_rx: Receiver<StreamEvent>,
}

impl CrosstermEventSource {
    pub fn new(stream_rx: Receiver<StreamEvent>) -> Self {
        Self { stream_rx }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Ok(stream_event) = self.stream_rx.try_recv() {
            return Ok(Some(AppEvent::Stream(stream_event)));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            return Ok(map_key(key));
        }

        Ok(None)
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        KeyCode::Char(ch) => ch.to_string(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl, alt)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_enter_to_the_named_commit_key() {
        let event = map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new("enter", false, false)))
        );
    }

    #[test]
    fn maps_alt_enter_with_the_modifier_flag() {
        let event = map_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new("enter", false, true)))
        );
    }

    #[test]
    fn maps_ctrl_c_to_quit() {
        let event = map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn maps_plain_characters() {
        let event = map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new("x", false, false)))
        );
    }

    #[test]
    fn ignores_key_release_events() {
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(map_key(key), None);
    }

    #[test]
    fn ignores_unmapped_keys() {
        let event = map_key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));

        assert_eq!(event, None);
    }
}
