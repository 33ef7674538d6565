//! Application state for the TUI
//!
//! The App struct owns the session catalog, the user's selection, and the
//! current filter state. All derivations (filtered view, grouping, totals)
//! are computed on demand through the pure quote-engine functions.

use crate::catalog::LoadedCatalog;
use crate::config::Settings;
use crate::models::{Category, Selection, Service};
use crate::quote::{apply_filters, group_by_category, CatalogFilter};

use super::widgets::SearchInput;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search field
    Search,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Connection status and troubleshooting info
    Debug,
    /// Confirm clearing the whole selection
    ConfirmClear,
}

/// Main application state
pub struct App {
    /// The session catalog with provenance
    pub catalog: LoadedCatalog,

    /// Connection settings (displayed in the debug dialog)
    pub settings: Settings,

    /// The user's in-progress quote
    pub selection: Selection,

    /// Current category/search filter
    pub filter: CatalogFilter,

    /// Search field state
    pub search_input: SearchInput,

    /// Index of the highlighted service within the filtered view
    pub selected_index: usize,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create app state from a loaded catalog
    pub fn new(catalog: LoadedCatalog, settings: Settings) -> Self {
        Self {
            catalog,
            settings,
            selection: Selection::new(),
            filter: CatalogFilter::default(),
            search_input: SearchInput::new(),
            selected_index: 0,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            should_quit: false,
        }
    }

    /// Services matching the current filter, flattened in display order.
    ///
    /// The catalog view groups services by category, so `selected_index`
    /// must count rows in that same grouped order — not source-row order,
    /// which a live sheet is free to scramble.
    pub fn visible_services(&self) -> Vec<&Service> {
        let filtered = apply_filters(&self.catalog.services, &self.filter);
        group_by_category(&filtered)
            .into_iter()
            .flat_map(|(_, services)| services)
            .collect()
    }

    /// The currently highlighted service, cloned out of the catalog
    pub fn selected_service(&self) -> Option<Service> {
        self.visible_services()
            .get(self.selected_index)
            .map(|s| (**s).clone())
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move the highlight down
    pub fn select_next(&mut self) {
        let len = self.visible_services().len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Move the highlight up
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the highlight inside the filtered view after a filter change
    fn clamp_selection(&mut self) {
        let len = self.visible_services().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Advance the category filter: all -> first category -> ... -> all
    pub fn cycle_category_forward(&mut self) {
        self.filter.category = match self.filter.category {
            None => Some(Category::ALL[0]),
            Some(current) => {
                let next = current.sort_order() + 1;
                Category::ALL.get(next).copied()
            }
        };
        self.selected_index = 0;
    }

    /// Step the category filter backwards
    pub fn cycle_category_backward(&mut self) {
        self.filter.category = match self.filter.category {
            None => Some(Category::ALL[Category::ALL.len() - 1]),
            Some(current) => match current.sort_order() {
                0 => None,
                n => Some(Category::ALL[n - 1]),
            },
        };
        self.selected_index = 0;
    }

    /// Push the search field content into the filter (live, per keystroke)
    pub fn apply_search(&mut self) {
        self.filter.search = self.search_input.value().to_string();
        self.clamp_selection();
    }

    /// Increase the highlighted service's quantity by one
    pub fn increment_selected(&mut self) {
        if let Some(service) = self.selected_service() {
            let quantity = self.selection.quantity_of(&service.id) + 1;
            self.selection.set_quantity(&service, quantity);
        }
    }

    /// Decrease the highlighted service's quantity by one (0 removes it)
    pub fn decrement_selected(&mut self) {
        if let Some(service) = self.selected_service() {
            let quantity = self.selection.quantity_of(&service.id);
            if quantity > 0 {
                self.selection.set_quantity(&service, quantity - 1);
            }
        }
    }

    /// Remove the highlighted service from the selection entirely
    pub fn remove_selected(&mut self) {
        if let Some(service) = self.selected_service() {
            self.selection.set_quantity(&service, 0);
        }
    }

    /// Remove every selected service
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{offline_catalog, CatalogOrigin, LoadedCatalog};
    use chrono::Utc;

    fn app() -> App {
        App::new(offline_catalog(), Settings::default())
    }

    #[test]
    fn test_highlight_matches_grouped_display_order() {
        // A live sheet can list a Turbo row before a Repair row, but the
        // view groups Repair first. The highlight and the steppers must act
        // on the row the user actually sees.
        let catalog = LoadedCatalog {
            services: vec![
                Service::new("Turbo", 2999.99, Category::Turbo),
                Service::new("Repair", 49.99, Category::Repair),
            ],
            origin: CatalogOrigin::Sheet,
            fetched_at: Utc::now(),
        };
        let mut app = App::new(catalog, Settings::default());

        assert_eq!(app.selected_service().unwrap().id, "repair");

        app.increment_selected();
        assert_eq!(app.selection.quantity_of("repair"), 1);
        assert_eq!(app.selection.quantity_of("turbo"), 0);

        app.select_next();
        assert_eq!(app.selected_service().unwrap().id, "turbo");
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut app = app();
        app.increment_selected();
        app.increment_selected();

        let id = app.selected_service().unwrap().id;
        assert_eq!(app.selection.quantity_of(&id), 2);

        app.decrement_selected();
        assert_eq!(app.selection.quantity_of(&id), 1);

        app.decrement_selected();
        assert!(app.selection.is_empty());
    }

    #[test]
    fn test_decrement_on_unselected_is_noop() {
        let mut app = app();
        app.decrement_selected();
        assert!(app.selection.is_empty());
    }

    #[test]
    fn test_cycle_category_wraps_through_all() {
        let mut app = app();
        assert_eq!(app.filter.category, None);

        app.cycle_category_forward();
        assert_eq!(app.filter.category, Some(Category::Repair));

        for _ in 0..Category::ALL.len() {
            app.cycle_category_forward();
        }
        // Past the last category we are back at "all".
        assert_eq!(app.filter.category, None);

        app.cycle_category_backward();
        assert_eq!(app.filter.category, Some(Category::Turbo));
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut app = app();
        app.selected_index = 15;

        app.search_input.insert('t');
        app.search_input.insert('u');
        app.search_input.insert('r');
        app.search_input.insert('b');
        app.search_input.insert('o');
        app.apply_search();

        assert_eq!(app.visible_services().len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_service().unwrap().id, "turbo");
    }

    #[test]
    fn test_selection_navigation_stays_in_bounds() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.selected_index, 0);

        let len = app.visible_services().len();
        for _ in 0..len + 5 {
            app.select_next();
        }
        assert_eq!(app.selected_index, len - 1);
    }

    #[test]
    fn test_selection_survives_filter_change() {
        let mut app = app();
        app.increment_selected();
        let id = app.selected_service().unwrap().id;

        app.cycle_category_forward();
        app.cycle_category_forward();

        // Filtering changes the view, not the selection.
        assert_eq!(app.selection.quantity_of(&id), 1);
    }
}
