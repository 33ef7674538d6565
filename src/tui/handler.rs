//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate state updates based on the
//! current input mode and active dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Dialogs
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('i') => app.open_dialog(ActiveDialog::Debug),

        // Search
        KeyCode::Char('/') => app.input_mode = InputMode::Search,
        KeyCode::Esc => {
            // Drop the search filter entirely.
            app.search_input.clear();
            app.apply_search();
        }

        // Category filter
        KeyCode::Tab | KeyCode::Char(']') | KeyCode::Right => app.cycle_category_forward(),
        KeyCode::BackTab | KeyCode::Char('[') | KeyCode::Left => app.cycle_category_backward(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Quantity stepper
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(' ') | KeyCode::Enter => {
            app.increment_selected()
        }
        KeyCode::Char('-') | KeyCode::Char('_') => app.decrement_selected(),
        KeyCode::Char('0') | KeyCode::Delete => app.remove_selected(),

        // Clear all (with confirmation)
        KeyCode::Char('x') | KeyCode::Char('X') => {
            if !app.selection.is_empty() {
                app.open_dialog(ActiveDialog::ConfirmClear);
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while typing into the search field
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.apply_search();
        }
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.apply_search();
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.clear_selection();
                app.close_dialog();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        // Help and debug close on any dismissal key
        _ => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')
            | KeyCode::Char('i') => app.close_dialog(),
            _ => {}
        },
    }

    Ok(())
}
