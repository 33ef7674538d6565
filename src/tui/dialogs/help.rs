//! Help dialog
//!
//! Shows the keyboard shortcuts.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        section("Navigation"),
        Line::from(""),
        key_line("j/k, Up/Down", "Move between services"),
        key_line("Tab, [/]", "Cycle category filter"),
        key_line("/", "Search products"),
        key_line("Esc", "Clear search"),
        Line::from(""),
        section("Quote"),
        Line::from(""),
        key_line("+/Space/Enter", "Add one of the highlighted service"),
        key_line("-", "Remove one"),
        key_line("0/Del", "Remove the line entirely"),
        key_line("x", "Clear the whole quote"),
        Line::from(""),
        section("Other"),
        Line::from(""),
        key_line("i", "Connection debug info"),
        key_line("?", "Toggle this help"),
        key_line("q", "Quit"),
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
