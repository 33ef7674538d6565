//! Search input widget
//!
//! A single-line text input with cursor support, used for the product search
//! field in the filter bar.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// State for the search input field
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is ASCII-oriented)
    pub cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Display column of the cursor, counted in characters rather than the
    /// byte offset `cursor` tracks
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    /// Render the input as a line, with a placeholder when empty
    pub fn as_line(&self, focused: bool) -> Line<'_> {
        if self.content.is_empty() && !focused {
            return Line::from(Span::styled(
                "Search products...",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(Span::styled(self.content.as_str(), style))
    }
}
