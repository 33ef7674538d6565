//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the catalog and quote layers.

pub mod catalog;
pub mod config;
pub mod quote;

pub use catalog::{handle_catalog_command, CatalogArgs};
pub use config::handle_config_command;
pub use quote::{handle_quote_command, QuoteArgs};
