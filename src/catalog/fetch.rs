//! Google Sheets fetch
//!
//! Fetches the raw cell grid from the Sheets values endpoint. This is the
//! only layer that produces hard errors: missing configuration fails before
//! any network I/O, and transport or API failures carry enough detail for
//! the debug dialog. One shot per session, no retries.

use serde::Deserialize;
use tracing::{debug, error};

use crate::config::settings::{Settings, API_KEY_VAR, SPREADSHEET_ID_VAR};
use crate::error::{QuoteError, QuoteResult};

const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Response body of the values endpoint
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Error body shape the Sheets API uses for non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the Google Sheets values endpoint
#[derive(Debug)]
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    api_key: String,
    spreadsheet_id: String,
    sheet_name: String,
}

impl SheetsClient {
    /// Build a client from settings.
    ///
    /// Fails with a configuration error when the API key or spreadsheet id
    /// is missing, before any network call is made.
    pub fn new(settings: &Settings) -> QuoteResult<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| QuoteError::missing_env(API_KEY_VAR))?;
        let spreadsheet_id = settings
            .spreadsheet_id
            .clone()
            .ok_or_else(|| QuoteError::missing_env(SPREADSHEET_ID_VAR))?;

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            api_key,
            spreadsheet_id,
            sheet_name: settings.sheet_name.clone(),
        })
    }

    fn values_url(&self) -> String {
        format!(
            "{SHEETS_BASE_URL}/{}/values/{}?key={}",
            self.spreadsheet_id, self.sheet_name, self.api_key
        )
    }

    /// Fetch the raw cell grid for the configured sheet
    pub fn fetch_values(&self) -> QuoteResult<Vec<Vec<String>>> {
        debug!(sheet = %self.sheet_name, "fetching sheet values");

        let response = self.http.get(self.values_url()).send()?;
        let status = response.status();

        if !status.is_success() {
            // The API wraps failures in an error object with a message.
            let message = response
                .json::<ApiErrorBody>()
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());
            error!(status = status.as_u16(), %message, "Google Sheets API error");
            return Err(QuoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let range: ValueRange = response.json()?;
        debug!(rows = range.values.len(), "fetched sheet values");
        Ok(range.values)
    }
}
