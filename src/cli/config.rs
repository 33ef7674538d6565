//! Config CLI command
//!
//! Shows the Google Sheets connection status without exposing the API key.

use crate::config::settings::{Settings, DEFAULT_SHEET_NAME};

/// Handle the config command
pub fn handle_config_command(settings: &Settings) {
    println!("Wrench Quote Configuration");
    println!("==========================");
    println!(
        "API key:        {}",
        if settings.has_api_key() { "set" } else { "missing" }
    );
    println!(
        "Spreadsheet ID: {}",
        settings.spreadsheet_id.as_deref().unwrap_or("missing")
    );
    if settings.sheet_name == DEFAULT_SHEET_NAME {
        println!("Sheet name:     {} (default)", settings.sheet_name);
    } else {
        println!("Sheet name:     {}", settings.sheet_name);
    }

    if !settings.has_api_key() || !settings.has_spreadsheet_id() {
        println!();
        println!("The calculator will run on built-in fallback data until");
        println!("SHEETS_API_KEY and SHEETS_SPREADSHEET_ID are set.");
    }
}
