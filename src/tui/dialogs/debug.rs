//! Debug info dialog
//!
//! Shows the Google Sheets connection status and why fallback data is in
//! use, mirroring what `wrench config` prints plus the fetch outcome.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::catalog::CatalogOrigin;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the debug info dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Google Sheets Connection ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let settings = &app.settings;
    let mut lines = vec![
        Line::from(Span::styled(
            "Connection Status",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )),
        Line::from(""),
        status_line("API Key", settings.has_api_key(), "set", "missing"),
        status_line(
            "Spreadsheet ID",
            settings.has_spreadsheet_id(),
            settings.spreadsheet_id.as_deref().unwrap_or(""),
            "missing",
        ),
        Line::from(format!("  Sheet Name:     {}", settings.sheet_name)),
        Line::from(""),
        Line::from(Span::styled(
            "Catalog",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(format!("  Services:   {}", app.catalog.services.len())),
        Line::from(format!(
            "  Fetched at: {}",
            app.catalog.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        )),
    ];

    match &app.catalog.origin {
        CatalogOrigin::Sheet => {
            lines.push(Line::from(vec![
                Span::raw("  Source:     "),
                Span::styled("live sheet", Style::default().fg(Color::Green)),
            ]));
        }
        CatalogOrigin::Fallback(reason) => {
            lines.push(Line::from(vec![
                Span::raw("  Source:     "),
                Span::styled("built-in fallback data", Style::default().fg(Color::Yellow)),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("  Reason: ", Style::default().fg(Color::Red)),
                Span::raw(reason.describe()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn status_line(
    label: &str,
    ok: bool,
    ok_text: &str,
    missing_text: &str,
) -> Line<'static> {
    let (marker, text, color) = if ok {
        ("✓", ok_text, Color::Green)
    } else {
        ("✗", missing_text, Color::Red)
    };

    Line::from(vec![
        Span::raw(format!("  {label}:{}", " ".repeat(15_usize.saturating_sub(label.len())))),
        Span::styled(format!("{marker} {text}"), Style::default().fg(color)),
    ])
}
