//! Custom error types for Wrench Quote
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Catalog ingestion itself is infallible by
//! design; only the configuration and network layers produce hard errors.

use thiserror::Error;

/// The main error type for Wrench Quote operations
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Configuration-related errors (missing API key, spreadsheet id)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level errors from the HTTP client
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-success responses from the Google Sheets API
    #[error("Google Sheets API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Service lookup failures (CLI quote arguments)
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Invalid user input (quantities, quote arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl QuoteError {
    /// Create a configuration error for a missing environment variable
    pub fn missing_env(var: &str) -> Self {
        Self::Config(format!("{var} is not set"))
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for Wrench Quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;
