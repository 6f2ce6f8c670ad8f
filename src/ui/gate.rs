//! The access-key gate screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::session_state::SessionState;

use super::styles;

const PROMPT_SYMBOL: &str = "> ";
const MASK_SYMBOL: char = '\u{2022}';

pub fn render(frame: &mut Frame<'_>, state: &SessionState) {
    let [_, banner_area, panel_area, hint_area, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(frame.area());

    let banner = Paragraph::new(vec![
        Line::styled("GALAXY AI TERMINAL", styles::banner_style()),
        Line::styled("Access key required to open the relay", styles::hint_style()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(banner, banner_area);

    let input_area = centered_input_area(panel_area);
    render_key_input(frame, input_area, state);

    let hint = Paragraph::new(gate_hint(state.has_credential()))
        .alignment(Alignment::Center)
        .style(styles::hint_style());
    frame.render_widget(hint, hint_area);
}

fn centered_input_area(area: Rect) -> Rect {
    let [_, input_area, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .areas(area);
    input_area
}

fn render_key_input(frame: &mut Frame<'_>, area: Rect, state: &SessionState) {
    let masked = mask(state.gate_input().text());

    let line = Line::from(vec![
        Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style()),
        Span::styled(masked, styles::input_text_style()),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .title("Access Key")
            .borders(Borders::ALL)
            .border_style(styles::active_panel_border_style()),
    );
    frame.render_widget(input, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.len() as u16)
        .saturating_add(
            state
                .gate_input()
                .cursor_position()
                .min(u16::MAX as usize) as u16,
        );
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// The key never renders in clear text; every character becomes a bullet.
fn mask(text: &str) -> String {
    std::iter::repeat(MASK_SYMBOL)
        .take(text.chars().count())
        .collect()
}

fn gate_hint(has_credential: bool) -> &'static str {
    if has_credential {
        "Enter: transmit key | Esc: back to the relay | Ctrl+C: quit"
    } else {
        "Enter: transmit key | Ctrl+C: quit"
    }
}
