//! Catalog CLI command
//!
//! Lists the service catalog, optionally filtered, as a grouped price list.

use clap::Args;

use crate::catalog::{self, LoadedCatalog};
use crate::config::Settings;
use crate::display::format_catalog;
use crate::error::{QuoteError, QuoteResult};
use crate::models::Category;
use crate::quote::{apply_filters, CatalogFilter};

/// Arguments for the catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only show one category (e.g. "brakes", "restoration-kits")
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only show services whose name or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Use the built-in catalog without contacting Google Sheets
    #[arg(long)]
    pub offline: bool,
}

/// Handle the catalog command
pub fn handle_catalog_command(settings: &Settings, args: CatalogArgs) -> QuoteResult<()> {
    let catalog = load(settings, args.offline);
    let filter = build_filter(&args)?;

    let filtered = apply_filters(&catalog.services, &filter);
    println!("{}", format_catalog(&filtered));

    if !catalog.is_live() {
        println!("(showing built-in fallback data)");
    }

    Ok(())
}

fn load(settings: &Settings, offline: bool) -> LoadedCatalog {
    if offline {
        catalog::offline_catalog()
    } else {
        catalog::load_catalog(settings)
    }
}

fn build_filter(args: &CatalogArgs) -> QuoteResult<CatalogFilter> {
    let category = args
        .category
        .as_deref()
        .map(|raw| raw.parse::<Category>().map_err(QuoteError::InvalidInput))
        .transpose()?;

    Ok(CatalogFilter {
        category,
        search: args.search.clone().unwrap_or_default(),
    })
}
