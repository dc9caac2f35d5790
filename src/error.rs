//! Error types and result alias

use thiserror::Error;

/// Errors raised while driving the browser, extracting products or writing output
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Element not interactable: {0}")]
    ElementNotInteractable(String),

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Failed to parse {field} from {value:?}")]
    ParseFailed { field: &'static str, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("None of the {skipped} products on {category} could be extracted")]
    NoProductsExtracted { category: String, skipped: usize },
}

impl ScrapeError {
    /// Whether this error means a control was absent or could not be clicked.
    ///
    /// The navigator swallows these for the cookie banner and the "load more"
    /// button; everything else propagates.
    pub fn is_missing_or_uninteractable(&self) -> bool {
        matches!(self, ScrapeError::ElementNotFound(_) | ScrapeError::ElementNotInteractable(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScrapeError>;
