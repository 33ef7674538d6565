//! TUI views
//!
//! Renders the calculator screen and routes to the active dialog.

pub mod catalog;
pub mod filter_bar;
pub mod status_bar;
pub mod summary;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let has_alert = app.catalog.config_error().is_some();
    let layout = AppLayout::new(frame.area(), has_alert);

    if let Some(area) = layout.alert {
        render_alert(frame, app, area);
    }

    filter_bar::render(frame, app, layout.filter_bar);
    catalog::render(frame, app, layout.catalog);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Debug => dialogs::debug::render(frame, app),
        ActiveDialog::ConfirmClear => dialogs::confirm::render(frame, app),
    }
}

/// Connection-error alert banner
fn render_alert(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let message = app.catalog.config_error().unwrap_or_default().to_string();

    let block = Block::default()
        .title(" Connection Error ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let line = Line::from(vec![
        Span::raw(message),
        Span::styled(
            "  (press 'i' for debug info)",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
