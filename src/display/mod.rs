//! Display formatting for terminal output
//!
//! Provides utilities for formatting the catalog and quote summary for
//! non-interactive CLI output.

pub mod catalog;
pub mod summary;

pub use catalog::{format_catalog, format_price};
pub use summary::format_summary;
