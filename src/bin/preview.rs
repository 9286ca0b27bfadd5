//! Preview binary - renders one content file without touching preferences
//!
//! Usage:
//!   cargo run --bin preview -- data/en.json        # Locale inferred from the file name
//!   cargo run --bin preview -- draft.json ja       # Explicit locale
//!
//! Prints the full page HTML to stdout. Useful for checking a content file
//! before publishing it.

use anyhow::{Context, Result};
use cv_page::content::ContentDocument;
use cv_page::document::MemoryDocument;
use cv_page::i18n::Locale;
use cv_page::render::render;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cv_page=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let file = args
        .next()
        .context("Usage: preview <content.json> [locale]")?;
    let locale = match args.next() {
        Some(code) => Locale::from_code(&code)?,
        None => infer_locale(Path::new(&file))?,
    };

    let bytes = std::fs::read(&file).with_context(|| format!("Failed to read {}", file))?;
    let document = ContentDocument::from_slice(&bytes)
        .with_context(|| format!("{} is not a valid content document", file))?;

    let mut view = MemoryDocument::new();
    render(&document, locale, &mut view);
    info!("Rendered {} as {} ({})", file, locale.name(), locale.native_name());

    print!("{}", view.to_html());
    Ok(())
}

/// `data/en.json` -> `en`
fn infer_locale(path: &Path) -> Result<Locale> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Cannot infer locale from {}", path.display()))?;
    Locale::from_code(stem)
        .with_context(|| format!("Cannot infer locale from {}; pass it explicitly", path.display()))
}
