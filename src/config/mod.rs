//! Configuration for Wrench Quote
//!
//! Environment-backed connection settings for the Google Sheets catalog
//! source.

pub mod settings;

pub use settings::Settings;
