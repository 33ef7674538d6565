//! Wrench Quote - Terminal-based pricing calculator for an auto-repair shop
//!
//! This library provides the core functionality for the Wrench Quote
//! calculator. It ingests a service catalog from a Google-Sheets-backed
//! price list, classifies free-text item names into a fixed category set,
//! and maintains a running quote over user-selected services.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Connection settings from the environment
//! - `error`: Custom error types
//! - `models`: Core data models (services, categories, the selection)
//! - `catalog`: Ingestion — fetch, parse, classify, fallback
//! - `quote`: Pure filter/grouping derivations over the catalog
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: Interactive calculator interface
//!
//! # Example
//!
//! ```rust,ignore
//! use wrench_quote::catalog;
//! use wrench_quote::config::Settings;
//!
//! let settings = Settings::from_env();
//! let catalog = catalog::load_catalog(&settings); // never fails
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod quote;
pub mod tui;

pub use error::QuoteError;
