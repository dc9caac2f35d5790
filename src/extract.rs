//! Reading product records out of rendered tiles

use crate::config::FailurePolicy;
use crate::dom::{ElementHandle, selectors};
use crate::error::{Result, ScrapeError};
use crate::product::{Product, parse_price, parse_review_count};
use indicatif::ProgressBar;

/// Products read from one page, plus how many tiles were skipped
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub products: Vec<Product>,
    pub skipped: usize,
}

/// Read one product tile.
///
/// Fails if any field's element is missing or a number doesn't parse; a tile
/// never yields a partial record.
pub fn extract_product<E: ElementHandle>(tile: &E) -> Result<Product> {
    let title = tile
        .find(selectors::TITLE)?
        .property("title")?
        .ok_or_else(|| ScrapeError::ElementNotFound(format!("'{}' has no title property", selectors::TITLE)))?;

    let description = tile.find(selectors::DESCRIPTION)?.text()?;
    let price = parse_price(&tile.find(selectors::PRICE)?.text()?)?;
    let rating = tile.find_all(selectors::RATING_STAR)?.len() as u32;
    let num_of_reviews = parse_review_count(&tile.find(selectors::REVIEW_COUNT)?.text()?)?;

    Ok(Product { title, description, price, rating, num_of_reviews })
}

/// Read every tile in order, applying `policy` to tiles that fail.
///
/// Under [`FailurePolicy::Skip`] a bad tile is logged and counted; under
/// [`FailurePolicy::Abort`] the first bad tile's error is returned.
pub fn extract_all<E: ElementHandle>(tiles: &[E], policy: FailurePolicy, progress: &ProgressBar) -> Result<Extraction> {
    let mut extraction = Extraction { products: Vec::with_capacity(tiles.len()), skipped: 0 };

    for (index, tile) in tiles.iter().enumerate() {
        match extract_product(tile) {
            Ok(product) => extraction.products.push(product),
            Err(e) if policy == FailurePolicy::Skip => {
                log::warn!("Skipping product #{}: {}", index + 1, e);
                extraction.skipped += 1;
            }
            Err(e) => return Err(e),
        }
        progress.inc(1);
    }

    Ok(extraction)
}
