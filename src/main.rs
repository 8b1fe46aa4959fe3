//! Butik - terminal browser for a remote product catalog
//!
//! This application fetches a store's product catalog and browses it in
//! the terminal: homepage, filtered and sorted list views, and a
//! single-product detail view, with an HTML export of whatever is on
//! screen.

// Module declarations
mod api;
mod config;
mod constants;
mod export;
mod models;
mod routing;
mod services;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use api::loader::{FetchState, LoadStrategy};
use config::Config;
use routing::Route;

/// Butik - terminal browser for a remote product catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query string selecting the view, e.g. "?view=perfume" or "view=all&product=3"
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// View selector: all, perfume or makeup (overrides the query string)
    #[arg(long, value_name = "VIEW")]
    view: Option<String>,

    /// Product id to open in the detail view (overrides the query string)
    #[arg(long, value_name = "ID")]
    product: Option<String>,

    /// Override the product API base URL
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Data loading strategy for the "all" listing
    #[arg(long, value_enum, default_value = "collection")]
    strategy: LoadStrategy,

    /// Render the selected view to an HTML file and exit (no TUI)
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Silent unless RUST_LOG asks for events; stderr keeps the TUI clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load or create default config
    let mut config = if Config::exists() {
        match Config::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "failed to load config, using defaults");
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    if let Some(base) = cli.api_base {
        config.api.base_url = base;
    }

    // Resolve the route; explicit flags override the query string.
    let (query_view, query_product) = cli
        .query
        .as_deref()
        .map_or((None, None), routing::parse_query);
    let view = cli.view.or(query_view);
    let product = cli.product.or(query_product);
    let route = Route::resolve(view.as_deref(), product.as_deref());

    let fetch = FetchState::spawn(
        config.api.base_url.clone(),
        config.api.list_limit,
        route.clone(),
        cli.strategy,
    );
    let mut state = tui::AppState::new(route, config, fetch);

    if let Some(path) = cli.export {
        // Headless mode: wait for the fetch, write the page, exit.
        if let Some(message) = state.fetch.wait() {
            state.apply_fetch_message(message);
        }
        std::fs::write(&path, state.export_html())
            .with_context(|| format!("Failed to write export to {}", path.display()))?;
        println!("Skrevet til {}", path.display());
        return Ok(());
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
