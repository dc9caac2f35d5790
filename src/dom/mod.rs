//! DOM access module
//!
//! The navigator and extractor never talk to `headless_chrome` directly. They
//! go through two traits:
//! - PageHandle: a loaded document that can be navigated and queried
//! - ElementHandle: one element, with scoped lookups, text, properties and clicks
//!
//! ChromePage/ChromeElement implement both against a live tab.

pub mod chrome;
pub mod element;
pub mod selectors;

pub use chrome::{ChromeElement, ChromePage};
pub use element::{ElementHandle, PageHandle};
