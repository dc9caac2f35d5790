//! Loading a category page and forcing every product tile to render

use crate::config::ScrapeOptions;
use crate::dom::{ElementHandle, PageHandle, selectors};
use crate::error::Result;
use std::cell::Cell;
use std::time::Duration;

/// What happened to the cookie banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieOutcome {
    /// The accept button was clicked
    Accepted,
    /// No banner on the page (or it was accepted on an earlier page)
    NotFound,
    /// A banner was found but could not be clicked
    NotInteractable,
}

/// Why the "load more" loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreStop {
    /// The button is gone or could not be clicked
    Missing,
    /// The button is still in the DOM but hidden
    Hidden,
    /// `max_load_more_clicks` was reached
    ClickLimit,
}

/// Result of the pagination phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub clicks: usize,
    pub stopped: LoadMoreStop,
}

/// Drives a page until all of its products are rendered
#[derive(Debug, Clone)]
pub struct Navigator {
    load_more_delay: Duration,
    max_clicks: Option<usize>,
    /// Set once a banner has been accepted; later pages won't show one
    cookies_accepted: Cell<bool>,
}

impl Navigator {
    pub fn new(load_more_delay: Duration, max_clicks: Option<usize>) -> Self {
        Self { load_more_delay, max_clicks, cookies_accepted: Cell::new(false) }
    }

    pub fn from_options(options: &ScrapeOptions) -> Self {
        Self::new(options.load_more_delay, options.max_load_more_clicks)
    }

    /// Whether a cookie banner has been accepted by this navigator
    pub fn cookies_accepted(&self) -> bool {
        self.cookies_accepted.get()
    }

    /// Load `url`, dismiss the cookie banner, exhaust "load more", and return
    /// every product tile on the page.
    pub fn load_products<'p, P: PageHandle>(&self, page: &'p P, url: &str) -> Result<Vec<P::Element<'p>>> {
        page.goto(url)?;

        self.accept_cookies(page)?;

        let pagination = self.load_all(page)?;
        log::debug!("{}: {} load-more clicks, stopped: {:?}", url, pagination.clicks, pagination.stopped);

        page.find_all(selectors::PRODUCT)
    }

    /// Click the cookie accept button if there is one.
    ///
    /// A missing or unclickable banner is not an error.
    pub fn accept_cookies<P: PageHandle>(&self, page: &P) -> Result<CookieOutcome> {
        let buttons = match page.find_all(selectors::ACCEPT_COOKIES) {
            Ok(buttons) => buttons,
            Err(e) if e.is_missing_or_uninteractable() => Vec::new(),
            Err(e) => return Err(e),
        };

        let Some(button) = buttons.first() else {
            if self.cookies_accepted.get() {
                log::debug!("No cookie button; already accepted");
            } else {
                log::warn!("Cookie button not found or already accepted");
            }
            return Ok(CookieOutcome::NotFound);
        };

        match button.click() {
            Ok(()) => {
                self.cookies_accepted.set(true);
                log::info!("Accepted cookies");
                Ok(CookieOutcome::Accepted)
            }
            Err(e) if e.is_missing_or_uninteractable() => {
                log::warn!("Cookie button not found or already accepted ({})", e);
                Ok(CookieOutcome::NotInteractable)
            }
            Err(e) => Err(e),
        }
    }

    /// Click "load more" until it disappears, is hidden, or can't be clicked.
    ///
    /// Without a click limit this never returns on a page that keeps the
    /// button visible forever.
    pub fn load_all<P: PageHandle>(&self, page: &P) -> Result<Pagination> {
        let mut clicks = 0;

        loop {
            let button = match page.find(selectors::LOAD_MORE) {
                Ok(button) => button,
                Err(e) if e.is_missing_or_uninteractable() => {
                    log::debug!("No load-more button: {}", e);
                    return Ok(Pagination { clicks, stopped: LoadMoreStop::Missing });
                }
                Err(e) => return Err(e),
            };

            if !button.is_displayed()? {
                return Ok(Pagination { clicks, stopped: LoadMoreStop::Hidden });
            }

            // Only a button that would actually be clicked counts against the limit
            if self.max_clicks.is_some_and(|max| clicks >= max) {
                log::warn!("Stopped after {} load-more clicks; the page may have more products", clicks);
                return Ok(Pagination { clicks, stopped: LoadMoreStop::ClickLimit });
            }

            match button.click() {
                Ok(()) => {
                    clicks += 1;
                    log::debug!("Clicked load more ({})", clicks);
                    if !self.load_more_delay.is_zero() {
                        std::thread::sleep(self.load_more_delay);
                    }
                }
                Err(e) if e.is_missing_or_uninteractable() => {
                    log::debug!("Load-more button not clickable: {}", e);
                    return Ok(Pagination { clicks, stopped: LoadMoreStop::Missing });
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::from_options(&ScrapeOptions::default())
    }
}
