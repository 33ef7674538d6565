//! Filter bar view
//!
//! Search input on the left, category selector on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the filter bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(26)])
        .split(area);

    render_search(frame, app, chunks[0]);
    render_category(frame, app, chunks[1]);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Search;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Search (/) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let input = Paragraph::new(app.search_input.as_line(focused)).block(block);
    frame.render_widget(input, area);

    if focused {
        // Place the terminal cursor inside the input field, clamped so a
        // long query cannot push it past the border.
        let max_column = area.width.saturating_sub(2) as usize;
        let column = app.search_input.cursor_column().min(max_column) as u16;
        frame.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}

fn render_category(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Category (Tab) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let label = match app.filter.category {
        Some(category) => category.label(),
        None => "All Categories",
    };

    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
