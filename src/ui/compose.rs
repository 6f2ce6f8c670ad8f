//! Compose box rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::compose_state::ComposeState;

use super::styles;

/// Placeholder shown when the compose box is empty.
const PLACEHOLDER_TEXT: &str = "Enter your message to the AI system...";

/// Prompt symbol shown before the first input line.
const PROMPT_SYMBOL: &str = "> ";

/// Renders the compose box. While a reply is streaming the box is disabled:
/// dimmed border, busy title, no cursor.
pub fn render_compose(
    frame: &mut Frame<'_>,
    area: Rect,
    compose: &ComposeState,
    in_flight: bool,
) {
    let border_style = if in_flight {
        styles::inactive_panel_border_style()
    } else {
        styles::active_panel_border_style()
    };

    let title = if in_flight {
        "Transmission [TRANSMITTING...]"
    } else {
        "Transmission"
    };

    let visible_rows = area.height.saturating_sub(2).max(1) as usize;
    let (cursor_line, cursor_column) = cursor_line_column(compose.text(), compose.cursor_position());
    let scroll = cursor_line.saturating_sub(visible_rows - 1);

    let paragraph = Paragraph::new(build_input_lines(compose, in_flight))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);

    if !in_flight {
        let prompt_offset = if cursor_line == 0 {
            PROMPT_SYMBOL.len()
        } else {
            0
        };
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(prompt_offset as u16)
            .saturating_add(cursor_column.min(u16::MAX as usize) as u16);
        let cursor_y = area
            .y
            .saturating_add(1)
            .saturating_add((cursor_line - scroll).min(u16::MAX as usize) as u16);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Builds the compose box content: prompt + text, or the placeholder.
fn build_input_lines(compose: &ComposeState, in_flight: bool) -> Vec<Line<'static>> {
    if compose.is_empty() && !in_flight {
        return vec![Line::from(vec![
            Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style()),
            Span::styled(PLACEHOLDER_TEXT.to_owned(), styles::input_placeholder_style()),
        ])];
    }

    compose
        .text()
        .split('\n')
        .enumerate()
        .map(|(index, text_line)| {
            let mut spans = Vec::new();
            if index == 0 {
                spans.push(Span::styled(
                    PROMPT_SYMBOL.to_owned(),
                    styles::input_prompt_style(),
                ));
            }
            spans.push(Span::styled(
                text_line.to_owned(),
                styles::input_text_style(),
            ));
            Line::from(spans)
        })
        .collect()
}

/// Locates the cursor in (line, display-column) terms, newline-aware.
fn cursor_line_column(text: &str, cursor_position: usize) -> (usize, usize) {
    let mut line = 0;
    let mut column_text = String::new();

    for ch in text.chars().take(cursor_position) {
        if ch == '\n' {
            line += 1;
            column_text.clear();
        } else {
            column_text.push(ch);
        }
    }

    (line, UnicodeWidthStr::width(column_text.as_str()))
}
