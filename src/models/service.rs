//! Service catalog entity
//!
//! A [`Service`] is one line item from the shop catalog: a repair, a part, or
//! an upgrade with a fixed price. Services are immutable once produced by
//! ingestion and live for the duration of the session.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Stable identifier derived from the name (see [`slugify`])
    pub id: String,
    /// Item name with original casing preserved
    pub name: String,
    /// Shop price in dollars
    pub price: f64,
    /// Category assigned during ingestion
    pub category: Category,
    /// Description (the sheet carries no separate description column, so this
    /// duplicates the name)
    pub description: String,
}

impl Service {
    /// Create a service from an item name and price
    pub fn new(name: impl Into<String>, price: f64, category: Category) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            description: name.clone(),
            name,
            price,
            category,
        }
    }
}

/// Derive a stable id from an item name.
///
/// Lowercases the name and replaces every non-alphanumeric character with a
/// hyphen. Replacement is per-character with no collapsing, so
/// `"Spray Kit (Pro)"` becomes `"spray-kit--pro-"`. Distinct names that
/// normalize to the same slug collide; id-keyed consumers see last-write-wins
/// and list-based stores keep both entries. That matches the upstream sheet
/// contract and is left as-is.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
