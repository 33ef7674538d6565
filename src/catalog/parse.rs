//! Sheet-to-catalog parsing
//!
//! Converts the raw 2D cell grid returned by the Google Sheets values
//! endpoint into typed [`Service`] records. The sheet is maintained by hand,
//! so the parser is deliberately forgiving: the header row is located
//! heuristically, prices tolerate currency formatting, and anything that
//! cannot be understood is skipped with a diagnostic rather than failing the
//! whole load. An unusable sheet yields an empty catalog, which the caller
//! replaces with the fallback data.

use tracing::{debug, warn};

use crate::models::Service;

use super::classify::{classify, Classification};

/// Column labels the sheet must carry
const ITEM_COLUMN: &str = "Item";
const SHOP_PRICE_COLUMN: &str = "Shop Price";

/// The sheet format assumes at least a title block, a header row, and data.
const MIN_ROWS: usize = 5;

/// Resolved positions of the required columns within the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub item: usize,
    pub shop_price: usize,
}

/// Find the header row: the first row containing a cell exactly `"Item"`.
pub fn find_header_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter()
        .position(|row| row.iter().any(|cell| cell == ITEM_COLUMN))
}

/// Resolve the required column positions from a header row.
///
/// Returns `None` when either label is absent; the caller treats that as a
/// normal value, not an error.
pub fn resolve_columns(header: &[String]) -> Option<Columns> {
    let item = header.iter().position(|h| h == ITEM_COLUMN)?;
    let shop_price = header.iter().position(|h| h == SHOP_PRICE_COLUMN)?;
    Some(Columns { item, shop_price })
}

/// Coerce a currency-formatted cell to a price.
///
/// Strips every character that is not a digit, a period, or a minus sign,
/// then parses the remainder as f64. `"$1,299.99"` parses to `1299.99`;
/// `"TBD"` parses to nothing.
pub fn parse_price(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().ok()
}

/// Parse the raw cell grid into catalog services.
///
/// Never fails: malformed input degrades to an empty or partial catalog,
/// with the reason logged as a diagnostic. Services come back in source row
/// order.
pub fn parse_catalog(rows: &[Vec<String>]) -> Vec<Service> {
    if rows.len() < MIN_ROWS {
        warn!(rows = rows.len(), "not enough rows in the sheet");
        return Vec::new();
    }

    let Some(header_index) = find_header_row(rows) else {
        warn!("could not find header row containing \"{ITEM_COLUMN}\"");
        return Vec::new();
    };

    let Some(columns) = resolve_columns(&rows[header_index]) else {
        warn!(
            header = ?rows[header_index],
            "header row is missing \"{ITEM_COLUMN}\" or \"{SHOP_PRICE_COLUMN}\" column"
        );
        return Vec::new();
    };

    let mut services = Vec::new();

    for row in &rows[header_index + 1..] {
        // Rows without an item name are spacers or notes.
        let Some(name) = row.get(columns.item).filter(|cell| !cell.is_empty()) else {
            continue;
        };

        let Some(price_cell) = row.get(columns.shop_price).filter(|cell| !cell.is_empty())
        else {
            continue;
        };

        let Some(price) = parse_price(price_cell) else {
            debug!(item = %name, cell = %price_cell, "skipping row with unparseable price");
            continue;
        };

        let category = match classify(name) {
            Classification::Keep(category) => category,
            Classification::Skip => continue,
        };

        services.push(Service::new(name.clone(), price, category));
    }

    debug!(count = services.len(), "parsed services from the sheet");
    services
}
