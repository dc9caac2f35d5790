use crate::error::Result;

/// A handle to a rendered DOM element.
///
/// Element lookups are scoped to the element's subtree. Implemented by
/// [`ChromeElement`](crate::dom::ChromeElement) for a live browser; anything
/// else that can answer these questions (e.g. an in-memory fixture) can stand
/// in for it.
pub trait ElementHandle: Sized {
    /// Find the first descendant matching a CSS selector
    fn find(&self, selector: &str) -> Result<Self>;

    /// Find every descendant matching a CSS selector, in document order.
    /// Returns an empty vector when nothing matches.
    fn find_all(&self, selector: &str) -> Result<Vec<Self>>;

    /// Rendered text of the element (`innerText`)
    fn text(&self) -> Result<String>;

    /// Read a DOM property (not an attribute) as a string
    fn property(&self, name: &str) -> Result<Option<String>>;

    /// Click the element
    fn click(&self) -> Result<()>;

    /// Whether the element is currently rendered and visible
    fn is_displayed(&self) -> Result<bool>;
}

/// A loaded page that elements can be queried from
pub trait PageHandle {
    type Element<'a>: ElementHandle
    where
        Self: 'a;

    /// Navigate to a URL and wait for the load to finish
    fn goto(&self, url: &str) -> Result<()>;

    /// Find the first element in the document matching a CSS selector
    fn find(&self, selector: &str) -> Result<Self::Element<'_>>;

    /// Find every element in the document matching a CSS selector.
    /// Returns an empty vector when nothing matches.
    fn find_all(&self, selector: &str) -> Result<Vec<Self::Element<'_>>>;
}
