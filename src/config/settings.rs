//! Connection settings for the catalog source
//!
//! Settings are read once at startup from the environment (a `.env` file is
//! honored via dotenv). A missing API key or spreadsheet id is reported as a
//! configuration error by the fetch layer, never by ingestion.

use std::env;

/// Environment variable names
pub const API_KEY_VAR: &str = "SHEETS_API_KEY";
pub const SPREADSHEET_ID_VAR: &str = "SHEETS_SPREADSHEET_ID";
pub const SHEET_NAME_VAR: &str = "SHEETS_SHEET_NAME";

/// Sheet name used when none is configured
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Google Sheets connection settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// API key (absent is a configuration error at fetch time)
    pub api_key: Option<String>,
    /// Spreadsheet identifier (absent is a configuration error at fetch time)
    pub spreadsheet_id: Option<String>,
    /// Sheet tab name, defaulting to "Sheet1"
    pub sheet_name: String,
}

impl Settings {
    /// Read settings from the environment
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty(env::var(API_KEY_VAR).ok()),
            spreadsheet_id: non_empty(env::var(SPREADSHEET_ID_VAR).ok()),
            sheet_name: non_empty(env::var(SHEET_NAME_VAR).ok())
                .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
        }
    }

    /// Whether an API key is configured (the value itself is never displayed)
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Whether a spreadsheet id is configured
    pub fn has_spreadsheet_id(&self) -> bool {
        self.spreadsheet_id.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
