//! Style definitions for the themed UI.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Intro and banner styles
// =============================================================================

/// Style for the main title banner (bold gold).
pub fn banner_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the opening crawl body text.
pub fn crawl_text_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Style for key hints and other dim helper text.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Transcript styles
// =============================================================================

/// Style for the user's role label.
pub fn commander_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the assistant's role label.
pub fn droid_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for message body text.
pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for message time in the transcript header lines.
pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the blinking-block streaming indicator.
pub fn streaming_cursor_style() -> Style {
    Style::default().fg(Color::Yellow)
}

// =============================================================================
// Panel and input styles
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the prompt symbol before input text.
pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_style_is_bold_gold() {
        let style = banner_style();
        assert_eq!(style.fg, Some(Color::Yellow));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn commander_style_is_bold_cyan() {
        let style = commander_style();
        assert_eq!(style.fg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn droid_style_is_bold_gold() {
        let style = droid_style();
        assert_eq!(style.fg, Some(Color::Yellow));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn hint_style_is_dark_gray() {
        assert_eq!(hint_style().fg, Some(Color::DarkGray));
    }
}
