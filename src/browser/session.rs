use crate::browser::config::LaunchOptions;
use crate::dom::ChromePage;
use crate::error::{Result, ScrapeError};
use headless_chrome::Browser;
use std::ffi::OsStr;

/// Browser session that owns a Chrome/Chromium instance for the whole run.
///
/// The Chrome process is killed when the session is dropped, so every exit
/// path (including errors unwinding out of a scrape) tears the browser down.
/// [`close`](Self::close) does the same explicitly and reports tab errors.
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The single tab every category is scraped in
    page: ChromePage,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Hide the automation banner and navigator.webdriver flag
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Default is 30 seconds, which a long "load more" loop can exceed
        launch_opts.idle_browser_timeout = options.idle_timeout;

        launch_opts.headless = options.headless;
        launch_opts.sandbox = options.sandbox;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        log::debug!(
            "Launching browser (headless: {}, sandbox: {})",
            launch_opts.headless,
            launch_opts.sandbox
        );

        let browser = Browser::new(launch_opts).map_err(|e| ScrapeError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, page: ChromePage::new(tab) })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// The page all scraping happens in
    pub fn page(&self) -> &ChromePage {
        &self.page
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Shut the browser down.
    ///
    /// Consumes the session so it cannot be closed twice. Tabs are closed
    /// first; the process itself goes away when `self` is dropped at the end
    /// of this call.
    pub fn close(self) -> Result<()> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| ScrapeError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        for tab in tabs {
            if let Err(e) = tab.close(false) {
                log::debug!("Failed to close tab: {}", e);
            }
        }

        log::debug!("Browser closed");
        Ok(())
    }
}
