//! Catalog ingestion
//!
//! Turns the spreadsheet-backed data source into the session catalog. The
//! fetch is a single shot at startup; any failure (configuration, transport,
//! API, or an unusable sheet) substitutes the static fallback catalog so the
//! calculator is always usable. The reason for a substitution is kept on
//! [`CatalogOrigin`] for the debug dialog and diagnostics.

pub mod classify;
pub mod fallback;
pub mod fetch;
pub mod parse;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::QuoteError;
use crate::models::Service;

pub use classify::{classify, Classification};
pub use fallback::fallback_catalog;
pub use fetch::SheetsClient;
pub use parse::parse_catalog;

/// Where the session catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Parsed from the live sheet
    Sheet,
    /// Fallback data substituted for the given reason
    Fallback(FallbackReason),
}

/// Why the fallback catalog was substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Missing API key or spreadsheet id; surfaced as a user-visible alert
    Config(String),
    /// Network or API failure; shown only in the debug dialog
    Fetch(String),
    /// The sheet fetched fine but parsed to nothing
    EmptyParse,
}

impl FallbackReason {
    /// Human-readable description for the debug dialog
    pub fn describe(&self) -> String {
        match self {
            FallbackReason::Config(message) => message.clone(),
            FallbackReason::Fetch(message) => message.clone(),
            FallbackReason::EmptyParse => {
                "no services found in the sheet".to_string()
            }
        }
    }
}

/// The catalog for one session, with provenance
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub services: Vec<Service>,
    pub origin: CatalogOrigin,
    pub fetched_at: DateTime<Utc>,
}

impl LoadedCatalog {
    /// Whether the catalog is live sheet data
    pub fn is_live(&self) -> bool {
        self.origin == CatalogOrigin::Sheet
    }

    /// Configuration error message, if that is why fallback data is in use
    pub fn config_error(&self) -> Option<&str> {
        match &self.origin {
            CatalogOrigin::Fallback(FallbackReason::Config(message)) => Some(message),
            _ => None,
        }
    }
}

/// Load the session catalog, falling back to built-in data on any failure.
///
/// This function never fails; the worst case is a fallback catalog with the
/// reason recorded on the origin.
pub fn load_catalog(settings: &Settings) -> LoadedCatalog {
    let fetched_at = Utc::now();

    let result = SheetsClient::new(settings).and_then(|client| client.fetch_values());

    let (services, origin) = match result {
        Ok(rows) => ingest_rows(&rows),
        Err(err @ QuoteError::Config(_)) => {
            warn!(error = %err, "connection not configured, using fallback data");
            (
                fallback_catalog(),
                CatalogOrigin::Fallback(FallbackReason::Config(err.to_string())),
            )
        }
        Err(err) => {
            warn!(error = %err, "failed to fetch sheet, using fallback data");
            (
                fallback_catalog(),
                CatalogOrigin::Fallback(FallbackReason::Fetch(err.to_string())),
            )
        }
    };

    LoadedCatalog {
        services,
        origin,
        fetched_at,
    }
}

/// Turn fetched rows into catalog data, substituting the fallback catalog
/// when the sheet parses to nothing
fn ingest_rows(rows: &[Vec<String>]) -> (Vec<Service>, CatalogOrigin) {
    let services = parse_catalog(rows);
    if services.is_empty() {
        warn!("sheet parsed to an empty catalog, using fallback data");
        (
            fallback_catalog(),
            CatalogOrigin::Fallback(FallbackReason::EmptyParse),
        )
    } else {
        info!(count = services.len(), "loaded services from the sheet");
        (services, CatalogOrigin::Sheet)
    }
}

/// Build a catalog from the built-in data without touching the network
pub fn offline_catalog() -> LoadedCatalog {
    LoadedCatalog {
        services: fallback_catalog(),
        origin: CatalogOrigin::Fallback(FallbackReason::Fetch("offline mode".to_string())),
        fetched_at: Utc::now(),
    }
}
