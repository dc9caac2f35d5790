//! CSS selectors for the webscraper.io e-commerce test site

/// Cookie consent button
pub const ACCEPT_COOKIES: &str = ".acceptCookies";

/// "Load more" pagination button
pub const LOAD_MORE: &str = ".btn.btn-primary.btn-lg.btn-block";

/// A product tile
pub const PRODUCT: &str = ".thumbnail";

/// Product link; the full name lives in its `title` property
pub const TITLE: &str = ".title";

pub const DESCRIPTION: &str = ".description";

pub const PRICE: &str = ".price";

/// One per filled star in the rating widget
pub const RATING_STAR: &str = ".ws-icon-star";

/// "<N> reviews"
pub const REVIEW_COUNT: &str = ".review-count";
