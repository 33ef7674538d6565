//! TUI dialogs

pub mod confirm;
pub mod debug;
pub mod help;
