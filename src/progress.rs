//! Console progress for the category loop and the products within a category

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};

const CATEGORY_TEMPLATE: &str = "{prefix:>10} [{bar:40.cyan/blue}] {pos}/{len} {msg}";
const PRODUCT_TEMPLATE: &str = "{prefix:>10} [{bar:40.green/white}] {pos}/{len} products";

/// Two-level progress display: one bar over categories, one over the
/// products of the category being extracted.
///
/// Everything is drawn to stderr, or nowhere when created with
/// [`ScrapeProgress::hidden`].
pub struct ScrapeProgress {
    multi: MultiProgress,
    category_bar: ProgressBar,
}

impl ScrapeProgress {
    pub fn new(total_categories: u64, visible: bool) -> Self {
        let target = if visible { ProgressDrawTarget::stderr() } else { ProgressDrawTarget::hidden() };
        Self::with_multi(total_categories, MultiProgress::with_draw_target(target))
    }

    /// Draw into an existing `MultiProgress`, e.g. one shared with a
    /// [`SuspendingWriter`] that log output goes through
    pub fn with_multi(total_categories: u64, multi: MultiProgress) -> Self {
        let category_bar = multi.add(ProgressBar::new(total_categories));
        category_bar.set_style(style(CATEGORY_TEMPLATE));
        category_bar.set_prefix("categories");

        Self { multi, category_bar }
    }

    /// A display that draws nothing
    pub fn hidden(total_categories: u64) -> Self {
        Self::new(total_categories, false)
    }

    /// Announce a category and return a bar for its products
    pub fn start_category(&self, name: &str, total_products: u64) -> ProgressBar {
        self.category_bar.set_message(name.to_string());

        let bar = self.multi.add(ProgressBar::new(total_products));
        bar.set_style(style(PRODUCT_TEMPLATE));
        bar.set_prefix(name.to_string());
        bar
    }

    /// Clear a category's product bar and advance the category bar
    pub fn finish_category(&self, bar: ProgressBar) {
        bar.finish_and_clear();
        self.multi.remove(&bar);
        self.category_bar.inc(1);
    }

    pub fn finish(&self, message: &str) {
        self.category_bar.finish_with_message(message.to_string());
    }

    pub fn categories_done(&self) -> u64 {
        self.category_bar.position()
    }
}

impl Drop for ScrapeProgress {
    fn drop(&mut self) {
        if !self.category_bar.is_finished() {
            self.category_bar.finish_and_clear();
        }
    }
}

/// Writes to stderr with the progress bars cleared, then redraws them.
///
/// Hand one of these to the logger so log lines don't tear the bars.
#[derive(Debug, Clone)]
pub struct SuspendingWriter {
    multi: MultiProgress,
}

impl SuspendingWriter {
    pub fn new(multi: MultiProgress) -> Self {
        Self { multi }
    }
}

impl Write for SuspendingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.multi.suspend(|| io::stderr().flush())
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_flow() {
        let progress = ScrapeProgress::hidden(2);

        let bar = progress.start_category("laptops", 3);
        bar.inc(3);
        assert_eq!(bar.position(), 3);
        progress.finish_category(bar);

        let bar = progress.start_category("tablets", 0);
        progress.finish_category(bar);

        assert_eq!(progress.categories_done(), 2);
        progress.finish("done");
    }

    #[test]
    fn test_shared_multi_and_writer() {
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let mut writer = SuspendingWriter::new(multi.clone());

        let progress = ScrapeProgress::with_multi(1, multi);
        let bar = progress.start_category("phones", 2);

        assert_eq!(writer.write(b"").unwrap(), 0);
        writer.flush().unwrap();

        bar.inc(2);
        progress.finish_category(bar);
        assert_eq!(progress.categories_done(), 1);
    }

    #[test]
    fn test_templates_are_valid() {
        assert!(ProgressStyle::default_bar().template(CATEGORY_TEMPLATE).is_ok());
        assert!(ProgressStyle::default_bar().template(PRODUCT_TEMPLATE).is_ok());
    }
}
