//! Item name classification
//!
//! Free-text item names from the sheet are sorted into the fixed category set
//! by an ordered list of substring rules, evaluated top to bottom with
//! first-match-wins semantics. The rule order is load-bearing: "Turbo Engine"
//! is Turbo, not Engines, because the turbo rule comes first. Some of the
//! repair sub-conditions are redundant with the plain substring check; they
//! are kept verbatim so edge-case names keep classifying the way the sheet
//! maintainers expect. Do not reorder or simplify.

use crate::models::Category;

/// Outcome of classifying an item name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Keep the row under this category
    Keep(Category),
    /// Drop the row entirely (internal marker, never reaches the catalog)
    Skip,
}

type Predicate = fn(&str) -> bool;

/// Ordered rule table. Predicates receive the lowercased item name.
static RULES: &[(Predicate, Classification)] = &[
    (is_skipped_item, Classification::Skip),
    (is_repair, Classification::Keep(Category::Repair)),
    (is_turbo, Classification::Keep(Category::Turbo)),
    (is_restoration, Classification::Keep(Category::RestorationKits)),
    (is_suspension, Classification::Keep(Category::Suspensions)),
    (is_brake, Classification::Keep(Category::Brakes)),
    (is_engine, Classification::Keep(Category::Engines)),
    (is_transmission, Classification::Keep(Category::Transmissions)),
    (is_tire, Classification::Keep(Category::Tires)),
];

/// Classify an item name into a category (or Skip).
///
/// Matching is case-insensitive. Names matching no rule land in the
/// Services bucket.
pub fn classify(name: &str) -> Classification {
    let name = name.to_lowercase();

    for (predicate, outcome) in RULES {
        if predicate(&name) {
            return *outcome;
        }
    }

    Classification::Keep(Category::Services)
}

// Repair-kit consumables are tracked elsewhere and excluded from the quote.
fn is_skipped_item(name: &str) -> bool {
    matches!(
        name,
        "none" | "basic repair kit" | "advanced repair kit" | "pro repair kit"
    )
}

fn is_repair(name: &str) -> bool {
    name == "repair"
        || name == "government repair"
        || name.contains("repair")
        || (name.contains("government") && name.contains("repair"))
}

fn is_turbo(name: &str) -> bool {
    name.contains("turbo")
}

fn is_restoration(name: &str) -> bool {
    name.contains("restoration")
}

fn is_suspension(name: &str) -> bool {
    name.contains("suspension")
}

fn is_brake(name: &str) -> bool {
    name.contains("brake")
}

fn is_engine(name: &str) -> bool {
    name.contains("engine")
}

fn is_transmission(name: &str) -> bool {
    name.contains("transmission")
}

fn is_tire(name: &str) -> bool {
    name.contains("tire") && !name.contains("kit")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep(category: Category) -> Classification {
        Classification::Keep(category)
    }

    #[test]
    fn test_skip_list_is_exact_match() {
        assert_eq!(classify("None"), Classification::Skip);
        assert_eq!(classify("Basic Repair Kit"), Classification::Skip);
        assert_eq!(classify("Advanced Repair Kit"), Classification::Skip);
        assert_eq!(classify("Pro Repair Kit"), Classification::Skip);
    }

    #[test]
    fn test_skip_precedes_repair_substring() {
        // Contains "repair" but is on the exact-match skip list.
        assert_eq!(classify("Basic Repair Kit"), Classification::Skip);
        // Not an exact match, so the repair substring rule applies.
        assert_eq!(classify("Basic Repair Kit Deluxe"), keep(Category::Repair));
    }

    #[test]
    fn test_repair_variants() {
        assert_eq!(classify("Repair"), keep(Category::Repair));
        assert_eq!(classify("Government Repair"), keep(Category::Repair));
        assert_eq!(classify("Quick Repair Service"), keep(Category::Repair));
    }

    #[test]
    fn test_turbo_precedes_engine() {
        assert_eq!(classify("Turbo Engine"), keep(Category::Turbo));
        assert_eq!(classify("Standard Engine"), keep(Category::Engines));
    }

    #[test]
    fn test_substring_buckets() {
        assert_eq!(classify("Standard Restoration Kit"), keep(Category::RestorationKits));
        assert_eq!(classify("Performance Suspension"), keep(Category::Suspensions));
        assert_eq!(classify("Standard Brakes"), keep(Category::Brakes));
        assert_eq!(classify("Performance Transmission"), keep(Category::Transmissions));
    }

    #[test]
    fn test_tire_excludes_kits() {
        assert_eq!(classify("Performance Tires"), keep(Category::Tires));
        // Tire Kit falls through the tire rule into the default bucket.
        assert_eq!(classify("Tire Kit"), keep(Category::Services));
    }

    #[test]
    fn test_default_bucket() {
        assert_eq!(classify("Lock Pick"), keep(Category::Services));
        assert_eq!(classify("Spare Key"), keep(Category::Services));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("TURBO"), keep(Category::Turbo));
        assert_eq!(classify("standard brakes"), keep(Category::Brakes));
    }
}
