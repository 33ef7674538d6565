//! Quote CLI command
//!
//! Computes a one-shot quote total from NAME=QTY arguments, the
//! non-interactive counterpart of the TUI summary card.

use clap::Args;

use crate::catalog::{self, LoadedCatalog};
use crate::config::Settings;
use crate::display::format_summary;
use crate::error::{QuoteError, QuoteResult};
use crate::models::{slugify, Selection, Service};

/// Arguments for the quote command
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Items to quote, as NAME=QTY (e.g. "standard-brakes=2" or "Turbo=1")
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Use the built-in catalog without contacting Google Sheets
    #[arg(long)]
    pub offline: bool,
}

/// Handle the quote command
pub fn handle_quote_command(settings: &Settings, args: QuoteArgs) -> QuoteResult<()> {
    let catalog = load(settings, args.offline);
    let mut selection = Selection::new();

    for item in &args.items {
        let (service, quantity) = parse_item(&catalog.services, item)?;
        selection.set_quantity(service, quantity);
    }

    println!("{}", format_summary(&selection));
    Ok(())
}

fn load(settings: &Settings, offline: bool) -> LoadedCatalog {
    if offline {
        catalog::offline_catalog()
    } else {
        catalog::load_catalog(settings)
    }
}

/// Parse one NAME=QTY argument against the catalog.
///
/// The name side matches either a service id or a service name (slugified),
/// so "Standard Brakes=2" and "standard-brakes=2" are equivalent.
fn parse_item<'a>(services: &'a [Service], raw: &str) -> QuoteResult<(&'a Service, u32)> {
    let (name, qty) = raw.split_once('=').unwrap_or((raw, "1"));

    let quantity: u32 = qty
        .parse()
        .map_err(|_| QuoteError::InvalidInput(format!("invalid quantity in '{raw}'")))?;

    let slug = slugify(name);
    let service = services
        .iter()
        .find(|s| s.id == slug)
        .ok_or_else(|| QuoteError::ServiceNotFound(name.to_string()))?;

    Ok((service, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;

    #[test]
    fn test_parse_item_by_id() {
        let services = fallback_catalog();
        let (service, qty) = parse_item(&services, "standard-brakes=2").unwrap();
        assert_eq!(service.name, "Standard Brakes");
        assert_eq!(qty, 2);
    }

    #[test]
    fn test_parse_item_by_name() {
        let services = fallback_catalog();
        let (service, qty) = parse_item(&services, "Standard Brakes=2").unwrap();
        assert_eq!(service.id, "standard-brakes");
        assert_eq!(qty, 2);
    }

    #[test]
    fn test_parse_item_defaults_to_one() {
        let services = fallback_catalog();
        let (_, qty) = parse_item(&services, "turbo").unwrap();
        assert_eq!(qty, 1);
    }

    #[test]
    fn test_parse_item_unknown_service() {
        let services = fallback_catalog();
        let err = parse_item(&services, "exhaust=1").unwrap_err();
        assert!(matches!(err, QuoteError::ServiceNotFound(_)));
    }

    #[test]
    fn test_parse_item_bad_quantity() {
        let services = fallback_catalog();
        let err = parse_item(&services, "turbo=lots").unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput(_)));
    }
}
