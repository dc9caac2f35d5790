//! Scrape configuration

use indicatif::MultiProgress;
use std::path::PathBuf;
use std::time::Duration;

/// What to do when a product or category cannot be scraped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure, count it, and carry on with the next product/category
    #[default]
    Skip,
    /// Stop the whole run on the first failure
    Abort,
}

/// Options controlling pagination, failure handling and output
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Directory the CSV files are written to
    pub output_dir: PathBuf,

    /// Pause after each "load more" click so new tiles can render
    pub load_more_delay: Duration,

    /// Upper bound on "load more" clicks per page; unbounded when `None`
    pub max_load_more_clicks: Option<usize>,

    pub failure_policy: FailurePolicy,

    /// Draw progress bars on stderr
    pub show_progress: bool,

    /// Draw the bars into this instead of a private one; share it with the
    /// logger's [`SuspendingWriter`](crate::progress::SuspendingWriter)
    pub multi_progress: Option<MultiProgress>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            load_more_delay: Duration::from_secs(1),
            max_load_more_clicks: None,
            failure_policy: FailurePolicy::Skip,
            show_progress: true,
            multi_progress: None,
        }
    }
}

impl ScrapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn load_more_delay(mut self, delay: Duration) -> Self {
        self.load_more_delay = delay;
        self
    }

    pub fn max_load_more_clicks(mut self, max: Option<usize>) -> Self {
        self.max_load_more_clicks = max;
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn multi_progress(mut self, multi: MultiProgress) -> Self {
        self.multi_progress = Some(multi);
        self
    }
}
