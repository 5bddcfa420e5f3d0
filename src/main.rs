//! pagegrid - A terminal personal-page builder with a responsive block grid
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use pagegrid_app::config;
use pagegrid_core::PageDocument;

/// A terminal personal-page builder with a responsive block grid
#[derive(Parser, Debug)]
#[command(name = "pagegrid")]
#[command(about = "Build a personal page from draggable blocks", long_about = None)]
struct Args {
    /// Page document to open
    #[arg(value_name = "DOCUMENT")]
    document: Option<PathBuf>,

    /// Validate a document and print a summary without starting the TUI
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pagegrid_core::logging::init()?;

    let args = Args::parse();
    let settings = config::load_settings_or_default();

    let document = args.document.or_else(|| settings.default_document.clone());

    if args.headless {
        let path = document.ok_or_else(|| eyre!("--headless requires a document path"))?;
        return run_headless(&path);
    }

    pagegrid_tui::run(settings, document).await?;
    Ok(())
}

/// Validate a document file and print a one-object JSON summary.
///
/// Exits non-zero when the document fails validation, so this doubles as a
/// check step in scripts.
fn run_headless(path: &PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let doc = PageDocument::from_json(&text)?;
    doc.validate()?;

    let summary = serde_json::json!({
        "document": path.display().to_string(),
        "title": doc.title.text,
        "cards": doc.grid.cards.len(),
        "stickers": doc.stickers.len(),
        "valid": true,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
