//! The product record and the conversions for its numeric fields

use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};

/// Field names in declaration order; this is the CSV header
pub const FIELDS: [&str; 5] = ["title", "description", "price", "rating", "num_of_reviews"];

/// One product tile from a category page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Number of filled stars
    pub rating: u32,
    pub num_of_reviews: u32,
}

/// Parse a price such as `"$199.99"`
pub fn parse_price(raw: &str) -> Result<f64> {
    let invalid = || ScrapeError::ParseFailed { field: "price", value: raw.to_string() };

    let price: f64 = raw.replace('$', "").trim().parse().map_err(|_| invalid())?;

    if !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }

    Ok(price)
}

/// Parse the leading integer of a review label such as `"12 reviews"`
pub fn parse_review_count(raw: &str) -> Result<u32> {
    raw.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ScrapeError::ParseFailed { field: "num_of_reviews", value: raw.to_string() })
}
