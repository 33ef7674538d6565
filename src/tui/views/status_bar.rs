//! Status bar view
//!
//! Key hints on the left, data-source indicator on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Search => "type to search | Enter/Esc: done",
        InputMode::Normal => {
            "j/k: move | +/-: quantity | Tab: category | /: search | i: debug | ?: help | q: quit"
        }
    };

    let source = if app.catalog.is_live() {
        Span::styled("live sheet", Style::default().fg(Color::Green))
    } else {
        Span::styled("fallback data", Style::default().fg(Color::Yellow))
    };

    let left = Span::styled(hints, Style::default().fg(Color::DarkGray));
    let padding = (area.width as usize)
        .saturating_sub(hints.chars().count() + source.content.chars().count())
        .max(1);

    let line = Line::from(vec![left, Span::raw(" ".repeat(padding)), source]);
    frame.render_widget(Paragraph::new(line), area);
}
