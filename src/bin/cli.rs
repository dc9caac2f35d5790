//! ecommerce-scraper CLI
//!
//! Scrapes every category of the webscraper.io "load more" demo shop into
//! `<category>.csv` files. With no arguments it runs headless, writes to the
//! current directory, and skips products that fail to parse.

use clap::Parser;
use ecommerce_scraper::progress::SuspendingWriter;
use ecommerce_scraper::{FailurePolicy, LaunchOptions, ScrapeOptions, catalog, scrape};
use indicatif::MultiProgress;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ecommerce-scraper", version, about = "Scrape the webscraper.io e-commerce demo into CSV files")]
struct Cli {
    /// Launch browser in headed mode (default: headless)
    #[arg(long)]
    headed: bool,

    /// Path to the Chrome/Chromium binary
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// Directory to write CSV files to
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Only scrape these categories (repeatable)
    #[arg(long = "category", short = 'c', value_name = "NAME")]
    categories: Vec<String>,

    /// Abort the whole run on the first product or category that fails
    #[arg(long)]
    strict: bool,

    /// Stop clicking "load more" after this many clicks per page
    #[arg(long, value_name = "N")]
    max_clicks: Option<usize>,

    /// Pause after each "load more" click, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    delay_ms: u64,

    /// Don't draw progress bars
    #[arg(long)]
    no_progress: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    // Log lines go through the progress bars so they don't get drawn over
    let multi = MultiProgress::new();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(SuspendingWriter::new(multi.clone()))))
        .init();

    let cli = Cli::parse();

    let categories = catalog::select(cli.categories.as_slice())?;

    let mut launch = LaunchOptions::new().headless(!cli.headed);
    if let Some(path) = cli.chrome_path {
        launch = launch.chrome_path(path);
    }

    let options = ScrapeOptions::new()
        .output_dir(cli.output_dir)
        .load_more_delay(Duration::from_millis(cli.delay_ms))
        .max_load_more_clicks(cli.max_clicks)
        .failure_policy(if cli.strict { FailurePolicy::Abort } else { FailurePolicy::Skip })
        .show_progress(!cli.no_progress)
        .multi_progress(multi);

    let summary = scrape(&categories, options, launch)?;

    log::info!(
        "Done: {} products written, {} skipped, {} of {} categories failed",
        summary.total_rows(),
        summary.total_skipped(),
        summary.failures().count(),
        summary.reports.len()
    );

    for (category, error) in summary.failures() {
        eprintln!("{}: {}", category.name, error);
    }
    for path in summary.stale_outputs() {
        eprintln!("{} was not updated and still holds an earlier run's data", path.display());
    }

    Ok(if summary.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
