//! Terminal User Interface module
//!
//! The interactive pricing calculator: a filterable service list with
//! quantity steppers, a live quote summary, and dialogs for help,
//! connection debugging, and clearing the quote.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_tui;
