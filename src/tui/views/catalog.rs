//! Catalog view
//!
//! The grouped service list with per-service quantity steppers. Category
//! headers are interleaved with service rows; only the service rows are
//! selectable.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::format_price;
use crate::models::Service;
use crate::quote::group_by_category;
use crate::tui::app::App;

/// Render the catalog panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Services ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let visible = app.visible_services();

    if app.catalog.services.is_empty() {
        let text = Paragraph::new("No products available.\nCheck the sheet connection.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    if visible.is_empty() {
        let text =
            Paragraph::new("No products found.\nTry adjusting your search or filter criteria.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let groups = group_by_category(&visible);

    let mut items: Vec<ListItem> = Vec::new();
    let mut highlighted_row = None;
    let mut service_index = 0;

    for (category, services) in groups {
        if services.is_empty() {
            continue;
        }

        items.push(ListItem::new(Line::from(Span::styled(
            category.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))));

        for service in services {
            if service_index == app.selected_index {
                highlighted_row = Some(items.len());
            }
            items.push(service_row(app, service, inner_width));
            service_index += 1;
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default();
    state.select(highlighted_row);

    frame.render_stateful_widget(list, area, &mut state);
}

/// One service row: name, quantity stepper, right-aligned price
fn service_row<'a>(app: &App, service: &Service, width: usize) -> ListItem<'a> {
    let quantity = app.selection.quantity_of(&service.id);
    let stepper = if quantity > 0 {
        format!("[- {quantity} +]")
    } else {
        "[    +]".to_string()
    };
    let price = format_price(service.price);

    let left = format!("  {}", service.name);
    let right = format!("{stepper}  {price:>9}");
    let padding = width
        .saturating_sub(left.chars().count() + right.chars().count())
        .max(1);

    let name_style = if quantity > 0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(left, name_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(right, Style::default().fg(Color::Gray)),
    ]))
}
