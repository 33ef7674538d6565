use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wrench_quote::cli::{
    handle_catalog_command, handle_config_command, handle_quote_command, CatalogArgs, QuoteArgs,
};
use wrench_quote::config::Settings;
use wrench_quote::{catalog, tui};

#[derive(Parser)]
#[command(
    name = "wrench",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based pricing calculator for an auto-repair shop",
    long_about = "Wrench Quote is a terminal-based pricing calculator for an \
                  auto-repair shop. It pulls the service catalog from a Google \
                  Sheets price list (falling back to built-in data when the \
                  sheet is unreachable) and computes running quote totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive calculator
    #[command(alias = "ui")]
    Tui {
        /// Use the built-in catalog without contacting Google Sheets
        #[arg(long)]
        offline: bool,
    },

    /// List the service catalog
    Catalog(CatalogArgs),

    /// Compute a one-shot quote from NAME=QTY items
    Quote(QuoteArgs),

    /// Show the Google Sheets connection configuration
    Config,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli);

    let settings = Settings::from_env();

    match cli.command {
        Some(Commands::Catalog(args)) => handle_catalog_command(&settings, args)?,
        Some(Commands::Quote(args)) => handle_quote_command(&settings, args)?,
        Some(Commands::Config) => handle_config_command(&settings),
        Some(Commands::Tui { offline }) => run_tui(settings, offline)?,
        None => run_tui(settings, false)?,
    }

    Ok(())
}

fn run_tui(settings: Settings, offline: bool) -> Result<()> {
    let catalog = if offline {
        catalog::offline_catalog()
    } else {
        catalog::load_catalog(&settings)
    };
    tui::run_tui(catalog, settings)
}

fn init_tracing(cli: &Cli) {
    // In TUI mode stderr shares the terminal with the alternate screen, so
    // diagnostics stay off unless RUST_LOG explicitly asks for them.
    let default_filter = match cli.command {
        Some(Commands::Tui { .. }) | None => "off",
        _ => "warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
