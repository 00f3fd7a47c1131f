//! about-pages - preferences and certificate-error pages for the browser
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use about_pages::{run_headless, HeadlessOptions};
use aboutpages_app::{Page, StartupOptions};
use aboutpages_core::prelude::*;
use clap::Parser;

/// about-pages - internal browser pages driven by upstream state pushes
#[derive(Parser, Debug)]
#[command(name = "aboutpages")]
#[command(about = "Preferences and certificate-error pages over an NDJSON protocol", long_about = None)]
struct Args {
    /// Page to open: preferences or cert-error
    #[arg(long, default_value = "preferences")]
    page: Page,

    /// Location the page was opened at; its fragment selects the initial tab
    #[arg(long, value_name = "URL")]
    location: Option<String>,

    /// JSON file with the initial state snapshot
    #[arg(long, value_name = "FILE")]
    bootstrap: Option<PathBuf>,

    /// TOML config file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for hint rotation, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Run in headless mode (JSON on stdin/stdout). This is the only mode.
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::startup(e.to_string()))?;
    aboutpages_core::logging::init()?;

    if !args.headless {
        debug!("--headless not given; headless is the only mode");
    }

    let options = HeadlessOptions {
        config_path: args.config.as_deref(),
        bootstrap_path: args.bootstrap.as_deref(),
        startup: StartupOptions {
            page: args.page,
            location: args.location,
            seed: args.seed,
        },
    };

    let result = run_headless(options).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}
