//! Quote selection
//!
//! Tracks which services the user has picked and in what quantity. Quantities
//! are always positive: setting a quantity of zero removes the entry rather
//! than storing it. Entries keep insertion order for the summary view.

use super::service::Service;

/// A selected service together with its quantity
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedService {
    pub service: Service,
    pub quantity: u32,
}

impl SelectedService {
    /// Extended price for this line (price x quantity)
    pub fn line_total(&self) -> f64 {
        self.service.price * self.quantity as f64
    }
}

/// The user's in-progress quote, keyed by service id
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: Vec<SelectedService>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity for a service.
    ///
    /// A quantity of zero removes any existing entry; a positive quantity
    /// inserts or replaces the entry for the service's id. There is never
    /// more than one entry per id.
    pub fn set_quantity(&mut self, service: &Service, quantity: u32) {
        if quantity == 0 {
            self.entries.retain(|e| e.service.id != service.id);
            return;
        }

        match self.entries.iter_mut().find(|e| e.service.id == service.id) {
            Some(entry) => {
                entry.service = service.clone();
                entry.quantity = quantity;
            }
            None => self.entries.push(SelectedService {
                service: service.clone(),
                quantity,
            }),
        }
    }

    /// Current quantity for a service id (0 when not selected)
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.service.id == id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of price x quantity over all entries
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.line_total()).sum()
    }

    /// Sum of all quantities (not the entry count)
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Number of distinct selected services
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SelectedService> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn brakes() -> Service {
        Service::new("Standard Brakes", 199.99, Category::Brakes)
    }

    fn turbo() -> Service {
        Service::new("Turbo", 899.99, Category::Turbo)
    }

    #[test]
    fn test_set_quantity_inserts() {
        let mut selection = Selection::new();
        selection.set_quantity(&brakes(), 2);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.quantity_of("standard-brakes"), 2);
    }

    #[test]
    fn test_set_quantity_replaces_not_duplicates() {
        let mut selection = Selection::new();
        selection.set_quantity(&brakes(), 2);
        selection.set_quantity(&brakes(), 5);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.quantity_of("standard-brakes"), 5);
    }

    #[test]
    fn test_zero_removes_entry() {
        let mut selection = Selection::new();
        selection.set_quantity(&brakes(), 2);
        selection.set_quantity(&brakes(), 0);

        assert!(selection.is_empty());
        assert_eq!(selection.quantity_of("standard-brakes"), 0);
    }

    #[test]
    fn test_zero_on_absent_service_is_noop() {
        let mut selection = Selection::new();
        selection.set_quantity(&turbo(), 1);
        selection.set_quantity(&brakes(), 0);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.quantity_of("turbo"), 1);
    }

    #[test]
    fn test_total_and_item_count() {
        let mut selection = Selection::new();
        selection.set_quantity(&brakes(), 2);
        selection.set_quantity(&turbo(), 1);

        assert!((selection.total() - (2.0 * 199.99 + 899.99)).abs() < 1e-9);
        assert_eq!(selection.item_count(), 3);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_total_is_linear_in_quantity_updates() {
        let mut selection = Selection::new();
        selection.set_quantity(&brakes(), 2);
        selection.set_quantity(&turbo(), 1);

        let before = selection.total();
        let existing = selection.quantity_of("standard-brakes");
        selection.set_quantity(&brakes(), 4);

        let expected = before - existing as f64 * 199.99 + 4.0 * 199.99;
        assert!((selection.total() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.set_quantity(&brakes(), 2);
        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.total(), 0.0);
        assert_eq!(selection.item_count(), 0);
    }

    #[test]
    fn test_slug_collision_shares_selection_key() {
        // "Spare Key" and "Spare.Key" slugify identically, so they share one
        // selection entry (documented last-write-wins behavior).
        let a = Service::new("Spare Key", 19.99, Category::Services);
        let b = Service::new("Spare.Key", 24.99, Category::Services);

        let mut selection = Selection::new();
        selection.set_quantity(&a, 1);
        selection.set_quantity(&b, 3);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.quantity_of(&a.id), 3);
        assert!((selection.total() - 3.0 * 24.99).abs() < 1e-9);
    }
}
