//! Render the CV page in the viewer's preferred locale.
//!
//! Usage:
//!   cv-page                 # Render the stored (or default) locale
//!   cv-page en              # Switch to English, then render
//!   cv-page toggle toggle   # Click the language toggle twice
//!
//! Each argument is one switch, applied in order. The last choice is
//! remembered in CV_PREFS_FILE for the next run.

use anyhow::Result;
use cv_page::config::Config;
use cv_page::controller::{CycleOutcome, LocaleController};
use cv_page::document::MemoryDocument;
use cv_page::prefs::FilePreferences;
use cv_page::source::{ContentSource, DirContentSource, HttpContentSource};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cv_page=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let switches: Vec<String> = std::env::args().skip(1).collect();

    let page = match &config.content_url {
        Some(url) => {
            info!("Loading content from {}", url);
            render_page(HttpContentSource::new(url.as_str()), &config, &switches).await
        }
        None => {
            info!("Loading content from {}", config.data_dir.display());
            render_page(DirContentSource::new(&config.data_dir), &config, &switches).await
        }
    };

    config.write_output(&page)?;
    Ok(())
}

/// Run the startup cycle, then each requested switch, and serialize the page.
async fn render_page<S: ContentSource>(source: S, config: &Config, switches: &[String]) -> String {
    let mut view = MemoryDocument::new();
    if let Some(lang) = &config.declared_lang {
        view = view.declaring(lang);
    }

    let controller =
        LocaleController::new(source, FilePreferences::new(&config.prefs_file), view);
    report(controller.run(controller.start()).await);

    for switch in switches {
        let cycle = if switch == "toggle" {
            controller.toggle()
        } else {
            controller.switch_to(switch)
        };
        match cycle {
            Some(cycle) => report(controller.run(cycle).await),
            None => info!("'{}' is unsupported or already current, nothing to do", switch),
        }
    }

    info!("Final locale: {}", controller.current());
    controller.into_view().to_html()
}

fn report(outcome: CycleOutcome) {
    match outcome {
        CycleOutcome::Applied => {}
        CycleOutcome::DiscardedStale => info!("A newer switch superseded this cycle"),
        CycleOutcome::FailedApplied => warn!("Content could not be loaded; page shows the failure message"),
    }
}
