//! Runs navigator → extractor → writer over a list of categories

use crate::browser::{BrowserSession, LaunchOptions};
use crate::catalog::Category;
use crate::config::{FailurePolicy, ScrapeOptions};
use crate::dom::PageHandle;
use crate::error::{Result, ScrapeError};
use crate::extract::extract_all;
use crate::navigate::Navigator;
use crate::output::write_csv;
use crate::progress::ScrapeProgress;
use std::path::PathBuf;

/// Outcome of scraping a single category
#[derive(Debug)]
pub enum CategoryOutcome {
    Written { path: PathBuf, rows: usize, skipped: usize },
    Failed(ScrapeError),
}

#[derive(Debug)]
pub struct CategoryReport {
    pub category: Category,
    pub outcome: CategoryOutcome,
    /// CSV left over from an earlier run when this category failed
    pub stale_output: Option<PathBuf>,
}

/// Per-category results of a run, in the order the categories were scraped
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<CategoryReport>,
}

impl RunSummary {
    /// True when every category was written
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Category, &ScrapeError)> {
        self.reports.iter().filter_map(|r| match &r.outcome {
            CategoryOutcome::Failed(e) => Some((&r.category, e)),
            CategoryOutcome::Written { .. } => None,
        })
    }

    pub fn total_rows(&self) -> usize {
        self.reports
            .iter()
            .map(|r| match r.outcome {
                CategoryOutcome::Written { rows, .. } => rows,
                CategoryOutcome::Failed(_) => 0,
            })
            .sum()
    }

    /// Output files that were kept from an earlier run because their category failed
    pub fn stale_outputs(&self) -> impl Iterator<Item = &PathBuf> {
        self.reports.iter().filter_map(|r| r.stale_output.as_ref())
    }

    pub fn total_skipped(&self) -> usize {
        self.reports
            .iter()
            .map(|r| match r.outcome {
                CategoryOutcome::Written { skipped, .. } => skipped,
                CategoryOutcome::Failed(_) => 0,
            })
            .sum()
    }
}

/// Scrapes categories one after another in a single page
pub struct Scraper<'p, P: PageHandle> {
    page: &'p P,
    navigator: Navigator,
    options: ScrapeOptions,
}

impl<'p, P: PageHandle> Scraper<'p, P> {
    pub fn new(page: &'p P, options: ScrapeOptions) -> Self {
        Self { page, navigator: Navigator::from_options(&options), options }
    }

    /// Scrape every category in order.
    ///
    /// With [`FailurePolicy::Skip`] a failed category is logged and recorded
    /// in the summary and the run moves on. With [`FailurePolicy::Abort`] the
    /// first failure is returned and later categories are not attempted.
    pub fn run(&self, categories: &[Category]) -> Result<RunSummary> {
        let total = categories.len() as u64;
        let progress = match &self.options.multi_progress {
            Some(multi) if self.options.show_progress => ScrapeProgress::with_multi(total, multi.clone()),
            _ => ScrapeProgress::new(total, self.options.show_progress),
        };
        let mut summary = RunSummary::default();

        for category in categories {
            log::info!("Scraping {} ({})", category.name, category.url());

            let mut stale_output = None;
            let outcome = match self.scrape_category(category, &progress) {
                Ok(outcome) => outcome,
                Err(e) if self.options.failure_policy == FailurePolicy::Abort => return Err(e),
                Err(e) => {
                    let previous = self.options.output_dir.join(category.file_name());
                    if previous.is_file() {
                        log::error!(
                            "Failed to scrape {}: {} ({} is from an earlier run)",
                            category.name,
                            e,
                            previous.display()
                        );
                        stale_output = Some(previous);
                    } else {
                        log::error!("Failed to scrape {}: {}", category.name, e);
                    }
                    CategoryOutcome::Failed(e)
                }
            };

            if let CategoryOutcome::Written { path, rows, skipped } = &outcome {
                log::info!("Wrote {} products to {} ({} skipped)", rows, path.display(), skipped);
            }

            summary.reports.push(CategoryReport { category: *category, outcome, stale_output });
        }

        progress.finish("done");
        Ok(summary)
    }

    fn scrape_category(&self, category: &Category, progress: &ScrapeProgress) -> Result<CategoryOutcome> {
        let tiles = self.navigator.load_products(self.page, &category.url())?;

        let bar = progress.start_category(category.name, tiles.len() as u64);
        let extraction = extract_all(&tiles, self.options.failure_policy, &bar);
        progress.finish_category(bar);
        let extraction = extraction?;

        // A page full of tiles that all failed is a broken page, not an empty category
        if !tiles.is_empty() && extraction.products.is_empty() {
            return Err(ScrapeError::NoProductsExtracted {
                category: category.name.to_string(),
                skipped: extraction.skipped,
            });
        }

        let path = write_csv(&self.options.output_dir, category.name, &extraction.products)?;

        Ok(CategoryOutcome::Written { path, rows: extraction.products.len(), skipped: extraction.skipped })
    }
}

/// Launch a browser, scrape `categories`, and shut the browser down.
///
/// The browser is closed whether or not the run succeeds.
pub fn scrape(categories: &[Category], options: ScrapeOptions, launch: LaunchOptions) -> Result<RunSummary> {
    let session = BrowserSession::launch(launch)?;

    let result = Scraper::new(session.page(), options).run(categories);

    if let Err(e) = session.close() {
        log::warn!("Failed to close browser cleanly: {}", e);
    }

    result
}
