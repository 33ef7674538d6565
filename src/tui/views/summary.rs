//! Quote summary view
//!
//! The sidebar card with selected line items, item count, and running total.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::format_price;
use crate::tui::app::App;

/// Render the quote summary
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Quote Summary ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.selection.is_empty() {
        let text = Paragraph::new("\nSelect products to see\nthe pricing summary")
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false });
        frame.render_widget(text, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} items selected", app.selection.item_count()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for entry in app.selection.iter() {
        let label = format!("{} x {}", entry.service.name, entry.quantity);
        lines.push(amount_line(label, entry.line_total(), width, Style::default()));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(amount_line(
        "Total".to_string(),
        app.selection.total(),
        width,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "x: clear all",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// A label with a right-aligned amount
fn amount_line(label: String, amount: f64, width: usize, style: Style) -> Line<'static> {
    let price = format_price(amount);
    let padding = width
        .saturating_sub(label.chars().count() + price.chars().count())
        .max(1);

    Line::from(vec![
        Span::styled(label, style),
        Span::raw(" ".repeat(padding)),
        Span::styled(price, style),
    ])
}
