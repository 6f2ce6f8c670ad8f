//! The themed opening crawl.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::domain::intro_state::IntroState;

use super::styles;

const CRAWL_TITLE: &str = "GALAXY AI TERMINAL";

const CRAWL_BODY: [&str; 20] = [
    "Episode IV",
    "A NEW HOPE FOR AI",
    "",
    "It is a period of digital revolution.",
    "Rebel developers, striking from hidden",
    "terminals, have won their first victory",
    "against the evil Empire of Traditional",
    "Programming.",
    "",
    "During the battle, rebel spies managed",
    "to steal secret plans to the Empire's",
    "ultimate weapon, the GPT MODEL,",
    "an artificial intelligence with enough",
    "power to understand an entire galaxy.",
    "",
    "Pursued by the Empire's sinister agents,",
    "Princess Developer races home aboard",
    "her starship, custodian of the stolen",
    "plans that can save her people and",
    "restore freedom to the galaxy...",
];

pub fn render(frame: &mut Frame<'_>, intro: &IntroState) {
    let [crawl_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let viewport_height = crawl_area.height as usize;
    let lines = crawl_lines(viewport_height);
    let offset = crawl_offset(lines.len(), intro.progress());

    let crawl = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .scroll((offset, 0));
    frame.render_widget(crawl, crawl_area);

    let hint = Paragraph::new("press any key to skip")
        .alignment(Alignment::Center)
        .style(styles::hint_style());
    frame.render_widget(hint, hint_area);
}

/// The crawl content, padded with a screen of blank lines so the text
/// rises in from the bottom edge.
fn crawl_lines(viewport_height: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(viewport_height + CRAWL_BODY.len() + 2);

    for _ in 0..viewport_height {
        lines.push(Line::default());
    }

    lines.push(Line::styled(CRAWL_TITLE, styles::banner_style()));
    lines.push(Line::default());

    for text in CRAWL_BODY {
        lines.push(Line::styled(text, styles::crawl_text_style()));
    }

    lines
}

/// Scroll offset for the crawl: sweeps every line past the viewport over
/// the intro duration.
fn crawl_offset(total_lines: usize, progress: f64) -> u16 {
    let clamped = progress.clamp(0.0, 1.0);
    (clamped * total_lines as f64).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crawl_starts_unscrolled() {
        assert_eq!(crawl_offset(40, 0.0), 0);
    }

    #[test]
    fn crawl_offset_grows_with_progress() {
        let early = crawl_offset(40, 0.2);
        let late = crawl_offset(40, 0.8);

        assert!(early < late);
    }

    #[test]
    fn crawl_fully_scrolls_out_by_completion() {
        assert_eq!(crawl_offset(40, 1.0), 40);
    }

    #[test]
    fn crawl_offset_tolerates_out_of_range_progress() {
        assert_eq!(crawl_offset(40, -1.0), 0);
        assert_eq!(crawl_offset(40, 2.0), 40);
    }

    #[test]
    fn crawl_lines_lead_with_a_blank_viewport() {
        let lines = crawl_lines(10);

        assert!(lines.len() > 10 + CRAWL_BODY.len());
        let first_text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first_text.is_empty());
    }

    #[test]
    fn crawl_lines_include_title_after_padding() {
        let lines = crawl_lines(3);

        let title: String = lines[3].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(title, CRAWL_TITLE);
    }
}
