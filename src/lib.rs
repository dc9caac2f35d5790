//! # ecommerce-scraper
//!
//! Scrapes the [webscraper.io](https://webscraper.io/test-sites/e-commerce/more) "load more"
//! e-commerce demo with headless Chrome and writes one CSV file per category.
//!
//! ## Running
//!
//! ```bash
//! # Scrape all six categories into the current directory
//! cargo run --bin ecommerce-scraper
//!
//! # Visible browser, two categories, abort on the first bad product
//! cargo run --bin ecommerce-scraper -- --headed --category laptops --category tablets --strict
//! ```
//!
//! Each category produces `<name>.csv` with the header
//! `title,description,price,rating,num_of_reviews`.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use ecommerce_scraper::{CATEGORIES, LaunchOptions, ScrapeOptions, scrape};
//!
//! # fn main() -> ecommerce_scraper::Result<()> {
//! let summary = scrape(&CATEGORIES, ScrapeOptions::new().output_dir("out"), LaunchOptions::default())?;
//! println!("{} products written", summary.total_rows());
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving a page yourself
//!
//! The navigator and extractor work on anything implementing [`PageHandle`],
//! so they can be pointed at an already open session:
//!
//! ```rust,no_run
//! use ecommerce_scraper::{BrowserSession, LaunchOptions, Navigator, extract_product};
//!
//! # fn main() -> ecommerce_scraper::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::new().headless(true))?;
//! let tiles = Navigator::default().load_products(session.page(), &ecommerce_scraper::CATEGORIES[2].url())?;
//! for tile in &tiles {
//!     println!("{:?}", extract_product(tile)?);
//! }
//! session.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Chrome launch options and the session that owns the process
//! - [`dom`]: page/element traits, the Chrome implementation, and site selectors
//! - [`catalog`]: the six category pages
//! - [`navigate`]: cookie banner and "load more" pagination
//! - [`extract`]: product tile → [`Product`]
//! - [`output`]: CSV writer
//! - [`scraper`]: runs the whole pipeline over a list of categories
//! - [`error`]: error types and result alias

pub mod browser;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod navigate;
pub mod output;
pub mod product;
pub mod progress;
pub mod scraper;

pub use browser::{BrowserSession, LaunchOptions};
pub use catalog::{CATEGORIES, Category};
pub use config::{FailurePolicy, ScrapeOptions};
pub use dom::{ChromeElement, ChromePage, ElementHandle, PageHandle};
pub use error::{Result, ScrapeError};
pub use extract::{Extraction, extract_all, extract_product};
pub use navigate::{CookieOutcome, LoadMoreStop, Navigator, Pagination};
pub use progress::SuspendingWriter;
pub use output::write_csv;
pub use product::Product;
pub use scraper::{CategoryOutcome, CategoryReport, RunSummary, Scraper, scrape};
