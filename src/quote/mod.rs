//! Selection/quote engine derivations
//!
//! Pure functions over the immutable catalog and the current filter state.
//! The mutable cells (selection, filter) are owned by the caller — the TUI
//! app or a CLI handler — and passed in by reference.

use crate::models::{Category, Service};

/// Current filter state for the catalog view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Restrict to one category (`None` means all)
    pub category: Option<Category>,
    /// Case-insensitive substring match against name or description
    pub search: String,
}

impl CatalogFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_empty()
    }
}

/// Apply category and search filters to the catalog.
///
/// Filters compose as logical AND; catalog order is preserved. An empty
/// filter returns the full catalog.
pub fn apply_filters<'a>(catalog: &'a [Service], filter: &CatalogFilter) -> Vec<&'a Service> {
    let query = filter.search.to_lowercase();

    catalog
        .iter()
        .filter(|service| match filter.category {
            Some(category) => service.category == category,
            None => true,
        })
        .filter(|service| {
            query.is_empty()
                || service.name.to_lowercase().contains(&query)
                || service.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Group filtered services by category in the fixed display order.
///
/// Every category appears in the result, empty or not; views hide the empty
/// groups rather than rendering blank sections. Within a group, services
/// keep their filtered (catalog) order.
pub fn group_by_category<'a>(filtered: &[&'a Service]) -> Vec<(Category, Vec<&'a Service>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let services = filtered
                .iter()
                .filter(|service| service.category == category)
                .copied()
                .collect();
            (category, services)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Service> {
        vec![
            Service::new("Turbo", 899.99, Category::Turbo),
            Service::new("Repair", 49.99, Category::Repair),
            Service::new("Standard Brakes", 199.99, Category::Brakes),
            Service::new("Performance Brakes", 349.99, Category::Brakes),
            Service::new("Lock Pick", 29.99, Category::Services),
        ]
    }

    fn filter(category: Option<Category>, search: &str) -> CatalogFilter {
        CatalogFilter {
            category,
            search: search.to_string(),
        }
    }

    #[test]
    fn test_empty_filter_returns_catalog_in_order() {
        let catalog = catalog();
        let filtered = apply_filters(&catalog, &CatalogFilter::default());

        let names: Vec<&str> = filtered.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Turbo", "Repair", "Standard Brakes", "Performance Brakes", "Lock Pick"]
        );
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let filtered = apply_filters(&catalog, &filter(Some(Category::Brakes), ""));

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.category == Category::Brakes));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let filtered = apply_filters(&catalog, &filter(None, "BRAKES"));

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_search_matches_description() {
        let mut catalog = catalog();
        catalog[4].description = "Door entry tool".to_string();
        let filtered = apply_filters(&catalog, &filter(None, "door entry"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Lock Pick");
    }

    #[test]
    fn test_filters_compose_as_and() {
        let catalog = catalog();
        let filtered = apply_filters(&catalog, &filter(Some(Category::Brakes), "performance"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Performance Brakes");
    }

    #[test]
    fn test_no_matches_is_empty() {
        let catalog = catalog();
        assert!(apply_filters(&catalog, &filter(None, "exhaust")).is_empty());
    }

    #[test]
    fn test_grouping_follows_fixed_order() {
        let catalog = catalog();
        let filtered = apply_filters(&catalog, &CatalogFilter::default());
        let groups = group_by_category(&filtered);

        // Category order, not source order: Repair before Turbo even though
        // Turbo is the first catalog row.
        let non_empty: Vec<Category> = groups
            .iter()
            .filter(|(_, services)| !services.is_empty())
            .map(|(category, _)| *category)
            .collect();
        assert_eq!(
            non_empty,
            vec![Category::Repair, Category::Services, Category::Brakes, Category::Turbo]
        );
    }

    #[test]
    fn test_grouping_includes_empty_categories() {
        let catalog = catalog();
        let filtered = apply_filters(&catalog, &CatalogFilter::default());
        let groups = group_by_category(&filtered);

        assert_eq!(groups.len(), Category::ALL.len());
        let engines = groups
            .iter()
            .find(|(category, _)| *category == Category::Engines)
            .unwrap();
        assert!(engines.1.is_empty());
    }
}
