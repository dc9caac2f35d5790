use crate::dom::element::{ElementHandle, PageHandle};
use crate::error::{Result, ScrapeError};
use headless_chrome::{Element, Tab};
use serde_json::json;
use std::sync::Arc;

const PROPERTY_JS: &str = r#"
    function(name) {
        const value = this[name];
        return value === undefined || value === null ? null : String(value);
    }
"#;

const IS_DISPLAYED_JS: &str = r#"
    function() {
        const style = window.getComputedStyle(this);
        if (style.display === 'none' || style.visibility === 'hidden' || style.opacity === '0') {
            return false;
        }
        return this.getClientRects().length > 0;
    }
"#;

const COUNT_DESCENDANTS_JS: &str = r#"
    function(selector) {
        return this.querySelectorAll(selector).length;
    }
"#;

/// A browser tab exposed through [`PageHandle`]
#[derive(Clone)]
pub struct ChromePage {
    tab: Arc<Tab>,
}

impl ChromePage {
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    /// Get the underlying tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Count matches up front: `find_elements` errors on zero matches, which
    /// would be indistinguishable from a real failure.
    fn count(&self, selector: &str) -> Result<u64> {
        let quoted = serde_json::to_string(selector)
            .map_err(|e| ScrapeError::EvaluationFailed(format!("Invalid selector {}: {}", selector, e)))?;
        let expression = format!("document.querySelectorAll({}).length", quoted);

        let result = self
            .tab
            .evaluate(&expression, false)
            .map_err(|e| ScrapeError::EvaluationFailed(format!("Failed to count '{}': {}", selector, e)))?;

        Ok(result.value.and_then(|v| v.as_u64()).unwrap_or(0))
    }
}

impl PageHandle for ChromePage {
    type Element<'a> = ChromeElement<'a>;

    fn goto(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| ScrapeError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| ScrapeError::NavigationFailed(format!("Navigation timeout for {}: {}", url, e)))?;

        Ok(())
    }

    fn find(&self, selector: &str) -> Result<ChromeElement<'_>> {
        self.tab
            .find_element(selector)
            .map(ChromeElement)
            .map_err(|e| ScrapeError::ElementNotFound(format!("Element '{}' not found: {}", selector, e)))
    }

    fn find_all(&self, selector: &str) -> Result<Vec<ChromeElement<'_>>> {
        if self.count(selector)? == 0 {
            return Ok(Vec::new());
        }

        let elements = self
            .tab
            .find_elements(selector)
            .map_err(|e| ScrapeError::ElementNotFound(format!("Elements '{}' not found: {}", selector, e)))?;

        Ok(elements.into_iter().map(ChromeElement).collect())
    }
}

/// A live DOM element inside a [`ChromePage`]
pub struct ChromeElement<'a>(pub Element<'a>);

impl ChromeElement<'_> {
    fn call(&self, function: &str, args: Vec<serde_json::Value>) -> Result<Option<serde_json::Value>> {
        let result = self
            .0
            .call_js_fn(function, args, false)
            .map_err(|e| ScrapeError::EvaluationFailed(e.to_string()))?;

        Ok(result.value)
    }
}

impl ElementHandle for ChromeElement<'_> {
    fn find(&self, selector: &str) -> Result<Self> {
        self.0
            .find_element(selector)
            .map(ChromeElement)
            .map_err(|e| ScrapeError::ElementNotFound(format!("Element '{}' not found: {}", selector, e)))
    }

    fn find_all(&self, selector: &str) -> Result<Vec<Self>> {
        let count = self
            .call(COUNT_DESCENDANTS_JS, vec![json!(selector)])?
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        if count == 0 {
            return Ok(Vec::new());
        }

        let elements = self
            .0
            .find_elements(selector)
            .map_err(|e| ScrapeError::ElementNotFound(format!("Elements '{}' not found: {}", selector, e)))?;

        Ok(elements.into_iter().map(ChromeElement).collect())
    }

    fn text(&self) -> Result<String> {
        self.0
            .get_inner_text()
            .map_err(|e| ScrapeError::EvaluationFailed(format!("Failed to read text: {}", e)))
    }

    fn property(&self, name: &str) -> Result<Option<String>> {
        let value = self.call(PROPERTY_JS, vec![json!(name)])?;
        Ok(value.and_then(|v| v.as_str().map(str::to_string)))
    }

    fn click(&self) -> Result<()> {
        self.0
            .click()
            .map_err(|e| ScrapeError::ElementNotInteractable(e.to_string()))?;
        Ok(())
    }

    fn is_displayed(&self) -> Result<bool> {
        let value = self.call(IS_DISPLAYED_JS, Vec::new())?;
        Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}
