//! The fixed set of category pages to scrape

use crate::error::{Result, ScrapeError};

/// Root of the demo site
pub const BASE_URL: &str = "https://webscraper.io/";

/// A category listing page on the demo site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Short name; also the CSV file stem
    pub name: &'static str,

    /// Path relative to [`BASE_URL`]
    pub path: &'static str,
}

impl Category {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// Absolute URL of the listing page
    pub fn url(&self) -> String {
        format!("{}{}", BASE_URL, self.path)
    }

    /// Output file name, e.g. `laptops.csv`
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

/// Every category, in scrape order
pub const CATEGORIES: [Category; 6] = [
    Category::new("home", "test-sites/e-commerce/more"),
    Category::new("computers", "test-sites/e-commerce/more/computers"),
    Category::new("laptops", "test-sites/e-commerce/more/computers/laptops"),
    Category::new("tablets", "test-sites/e-commerce/more/computers/tablets"),
    Category::new("phones", "test-sites/e-commerce/more/phones"),
    Category::new("touch", "test-sites/e-commerce/more/phones/touch"),
];

/// Look up a category by name
pub fn find(name: &str) -> Result<Category> {
    CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .copied()
        .ok_or_else(|| ScrapeError::UnknownCategory(name.to_string()))
}

/// Resolve a list of names into categories, keeping catalog order and
/// dropping duplicates. An empty list selects the whole catalog.
pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Vec<Category>> {
    if names.is_empty() {
        return Ok(CATEGORIES.to_vec());
    }

    let wanted = names.iter().map(|n| find(n.as_ref())).collect::<Result<Vec<_>>>()?;

    Ok(CATEGORIES.iter().filter(|c| wanted.contains(c)).copied().collect())
}
