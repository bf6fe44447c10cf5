//! Folio - terminal portfolio page viewer
//!
//! Renders a portfolio page manifest in the terminal with theme switching,
//! a collapsible navigation menu, scroll effects, and a category filter
//! over the project cards.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use folio::components::system_prefers_light;
use folio::config::{ConfigStore, ThemePreference};
use folio::constants::{APP_BINARY_NAME, APP_NAME};
use folio::page::{self, PageManifest};
use folio::runtime::Runtime;
use folio::tui;

/// Folio - terminal portfolio page viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a page manifest (TOML or JSON); omit for the built-in sample
    #[arg(value_name = "FILE")]
    page: Option<PathBuf>,

    /// Theme for this session ("dark" or "light"); overrides the stored
    /// preference without changing it
    #[arg(long, value_name = "THEME")]
    theme: Option<ThemePreference>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let manifest = match cli.page {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Page manifest not found: {}", path.display());
                eprintln!();
                eprintln!("Please provide a valid path to a TOML or JSON page manifest.");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {APP_BINARY_NAME} my_page.toml");
                eprintln!("  {APP_BINARY_NAME} path/to/page.json");
                eprintln!();
                eprintln!("Run without arguments to view the built-in sample page.");
                std::process::exit(1);
            }
            PageManifest::load(&path)?
        }
        None => PageManifest::sample(),
    };

    tracing::info!(title = %manifest.title, "starting {APP_NAME}");

    let doc = page::build(&manifest);
    let store = ConfigStore::load()?;
    let runtime = Runtime::new(doc, Box::new(store), system_prefers_light(), cli.theme);
    let mut state = tui::AppState::new(runtime);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}
