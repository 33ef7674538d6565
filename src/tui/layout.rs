//! Layout definitions for the TUI
//!
//! The calculator screen: an optional alert banner, a filter bar, the
//! catalog panel beside the quote summary, and a status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Connection-error alert banner (only when a config error is present)
    pub alert: Option<Rect>,
    /// Search input and category selector
    pub filter_bar: Rect,
    /// Grouped service list
    pub catalog: Rect,
    /// Quote summary sidebar
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, with_alert: bool) -> Self {
        let constraints: Vec<Constraint> = if with_alert {
            vec![
                Constraint::Length(3), // Alert banner
                Constraint::Length(3), // Filter bar
                Constraint::Min(5),    // Content
                Constraint::Length(1), // Status bar
            ]
        } else {
            vec![
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ]
        };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (alert, filter_bar, content, status_bar) = if with_alert {
            (Some(vertical[0]), vertical[1], vertical[2], vertical[3])
        } else {
            (None, vertical[0], vertical[1], vertical[2])
        };

        // Catalog beside the summary card
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),    // Catalog
                Constraint::Length(36), // Summary (fixed width)
            ])
            .split(content);

        Self {
            alert,
            filter_bar,
            catalog: horizontal[0],
            summary: horizontal[1],
            status_bar,
        }
    }
}

/// Centered rect helper for dialogs (percent of the parent area)
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
