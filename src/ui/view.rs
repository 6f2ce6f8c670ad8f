use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    message::{ChatMessage, Role},
    session_state::{SessionPhase, SessionState},
};

use super::{compose, gate, intro, styles};

/// Indent for message body lines, aligning them under the header label.
const BODY_INDENT: &str = "  ";

/// Block cursor appended to the reply while it is still streaming.
const STREAMING_CURSOR: &str = "\u{258B}";

const EMPTY_TRANSMISSION: &str = "[Empty transmission]";

pub fn render(frame: &mut Frame<'_>, state: &SessionState) {
    match state.phase() {
        SessionPhase::IntroPlaying => intro::render(frame, state.intro()),
        SessionPhase::AwaitingCredential => gate::render(frame, state),
        SessionPhase::Chatting => render_chat(frame, state),
    }
}

fn render_chat(frame: &mut Frame<'_>, state: &SessionState) {
    let [transcript_area, compose_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_transcript_panel(frame, transcript_area, state);
    compose::render_compose(frame, compose_area, state.compose(), state.in_flight());

    let status = Paragraph::new(status_line(state)).style(styles::hint_style());
    frame.render_widget(status, status_area);
}

fn render_transcript_panel(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let block = Block::default()
        .title("GALAXY AI TERMINAL")
        .borders(Borders::ALL)
        .border_style(styles::active_panel_border_style());

    if state.transcript().is_empty() {
        let placeholder = Paragraph::new("Awaiting transmission... The droids are standing by.")
            .style(styles::hint_style())
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let streaming = state.in_flight() && state.transcript().has_open_assistant();
    let lines = build_transcript_lines(state.transcript().messages(), inner_width, streaming);
    let scroll = bottom_scroll(lines.len(), inner_height);

    let transcript = Paragraph::new(lines).scroll((scroll, 0)).block(block);
    frame.render_widget(transcript, area);
}

/// Builds the rendered transcript: a header line per message (role label +
/// time), body lines wrapped to the panel width, a blank line between
/// messages. The streaming reply gets a trailing block cursor.
fn build_transcript_lines(
    messages: &[ChatMessage],
    width: usize,
    streaming: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let body_width = width.saturating_sub(UnicodeWidthStr::width(BODY_INDENT)).max(1);

    for (index, message) in messages.iter().enumerate() {
        let is_streaming =
            streaming && index == messages.len() - 1 && message.role == Role::Assistant;

        if index > 0 {
            lines.push(Line::default());
        }

        lines.push(Line::from(vec![
            Span::styled(message.role.display_label().to_owned(), role_style(message.role)),
            Span::styled(format!("  {}", message.display_time()), styles::message_time_style()),
        ]));

        let mut body_lines = wrap_content(&message.content, body_width);

        if message.content.is_empty() {
            if !is_streaming {
                lines.push(Line::from(vec![
                    Span::raw(BODY_INDENT.to_owned()),
                    Span::styled(EMPTY_TRANSMISSION.to_owned(), styles::hint_style()),
                ]));
                continue;
            }
            body_lines.clear();
        }

        let last_body = body_lines.len().saturating_sub(1);
        for (line_index, text_line) in body_lines.into_iter().enumerate() {
            let mut spans = vec![
                Span::raw(BODY_INDENT.to_owned()),
                Span::styled(text_line, styles::message_text_style()),
            ];
            if is_streaming && line_index == last_body {
                spans.push(Span::styled(
                    STREAMING_CURSOR.to_owned(),
                    styles::streaming_cursor_style(),
                ));
            }
            lines.push(Line::from(spans));
        }

        if is_streaming && message.content.is_empty() {
            lines.push(Line::from(vec![
                Span::raw(BODY_INDENT.to_owned()),
                Span::styled(STREAMING_CURSOR.to_owned(), styles::streaming_cursor_style()),
            ]));
        }
    }

    lines
}

fn role_style(role: Role) -> ratatui::style::Style {
    match role {
        Role::User => styles::commander_style(),
        Role::Assistant => styles::droid_style(),
    }
}

/// Scroll offset that keeps the newest line inside the viewport.
fn bottom_scroll(total_lines: usize, viewport_height: usize) -> u16 {
    total_lines
        .saturating_sub(viewport_height)
        .min(u16::MAX as usize) as u16
}

/// Word-wraps message content to the panel width, display-cell aware.
/// Hard-breaks words wider than the panel; preserves blank lines.
fn wrap_content(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0_usize;

        for word in raw_line.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if !current.is_empty() && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        wrapped.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
            }
        }

        wrapped.push(current);
    }

    wrapped
}

fn status_line(state: &SessionState) -> String {
    let stream = if state.in_flight() { "receiving" } else { "idle" };
    let hints = if state.in_flight() {
        "Ctrl+K: access key | Ctrl+C: quit"
    } else {
        "Enter: send | Alt+Enter: newline | Ctrl+K: access key | Ctrl+C: quit"
    };
    format!("stream: {stream} | {hints}")
}
