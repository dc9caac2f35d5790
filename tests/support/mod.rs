//! In-memory stand-in for a rendered shop page

#![allow(dead_code)]

use ecommerce_scraper::{ElementHandle, PageHandle, Result, ScrapeError};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

type ClickHandler = Box<dyn Fn(&FakeNode)>;

struct NodeInner {
    classes: Vec<String>,
    text: String,
    props: HashMap<String, String>,
    children: RefCell<Vec<FakeNode>>,
    displayed: Cell<bool>,
    clickable: bool,
    clicks: Cell<usize>,
    on_click: RefCell<Option<ClickHandler>>,
}

/// A DOM node matched by class selectors (`.a.b` means "has class a and b")
#[derive(Clone)]
pub struct FakeNode {
    inner: Rc<NodeInner>,
}

impl std::fmt::Debug for FakeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeNode")
            .field("classes", &self.inner.classes)
            .field("text", &self.inner.text)
            .finish_non_exhaustive()
    }
}

impl FakeNode {
    pub fn new(classes: &str) -> Self {
        Self::build(classes, "", HashMap::new(), Vec::new(), true, true, None)
    }

    fn build(
        classes: &str,
        text: &str,
        props: HashMap<String, String>,
        children: Vec<FakeNode>,
        displayed: bool,
        clickable: bool,
        on_click: Option<ClickHandler>,
    ) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                classes: classes.split_whitespace().map(str::to_string).collect(),
                text: text.to_string(),
                props,
                children: RefCell::new(children),
                displayed: Cell::new(displayed),
                clickable,
                clicks: Cell::new(0),
                on_click: RefCell::new(on_click),
            }),
        }
    }

    fn rebuild(self, f: impl FnOnce(&mut NodeParts)) -> Self {
        let inner = Rc::try_unwrap(self.inner).ok().expect("builder used on a shared node");
        let mut parts = NodeParts {
            classes: inner.classes.join(" "),
            text: inner.text,
            props: inner.props,
            children: inner.children.into_inner(),
            displayed: inner.displayed.get(),
            clickable: inner.clickable,
            on_click: inner.on_click.into_inner(),
        };
        f(&mut parts);
        Self::build(
            &parts.classes,
            &parts.text,
            parts.props,
            parts.children,
            parts.displayed,
            parts.clickable,
            parts.on_click,
        )
    }

    pub fn with_text(self, text: &str) -> Self {
        self.rebuild(|p| p.text = text.to_string())
    }

    pub fn with_prop(self, name: &str, value: &str) -> Self {
        self.rebuild(|p| {
            p.props.insert(name.to_string(), value.to_string());
        })
    }

    pub fn with_child(self, child: FakeNode) -> Self {
        self.rebuild(|p| p.children.push(child))
    }

    pub fn with_children(self, children: Vec<FakeNode>) -> Self {
        self.rebuild(|p| p.children.extend(children))
    }

    pub fn hidden(self) -> Self {
        self.rebuild(|p| p.displayed = false)
    }

    pub fn unclickable(self) -> Self {
        self.rebuild(|p| p.clickable = false)
    }

    pub fn on_click(self, handler: impl Fn(&FakeNode) + 'static) -> Self {
        self.rebuild(|p| p.on_click = Some(Box::new(handler)))
    }

    pub fn append(&self, children: Vec<FakeNode>) {
        self.inner.children.borrow_mut().extend(children);
    }

    pub fn set_displayed(&self, displayed: bool) {
        self.inner.displayed.set(displayed);
    }

    pub fn clicks(&self) -> usize {
        self.inner.clicks.get()
    }

    fn matches(&self, selector: &str) -> bool {
        selector
            .split('.')
            .filter(|c| !c.is_empty())
            .all(|c| self.inner.classes.iter().any(|own| own == c))
    }

    fn collect(&self, selector: &str, out: &mut Vec<FakeNode>) {
        for child in self.inner.children.borrow().iter() {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }
}

struct NodeParts {
    classes: String,
    text: String,
    props: HashMap<String, String>,
    children: Vec<FakeNode>,
    displayed: bool,
    clickable: bool,
    on_click: Option<ClickHandler>,
}

impl ElementHandle for FakeNode {
    fn find(&self, selector: &str) -> Result<Self> {
        self.find_all(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| ScrapeError::ElementNotFound(selector.to_string()))
    }

    fn find_all(&self, selector: &str) -> Result<Vec<Self>> {
        let mut out = Vec::new();
        self.collect(selector, &mut out);
        Ok(out)
    }

    fn text(&self) -> Result<String> {
        Ok(self.inner.text.clone())
    }

    fn property(&self, name: &str) -> Result<Option<String>> {
        Ok(self.inner.props.get(name).cloned())
    }

    fn click(&self) -> Result<()> {
        if !self.inner.clickable || !self.inner.displayed.get() {
            return Err(ScrapeError::ElementNotInteractable(self.inner.classes.join(" ")));
        }

        self.inner.clicks.set(self.inner.clicks.get() + 1);
        if let Some(handler) = self.inner.on_click.borrow().as_ref() {
            handler(self);
        }
        Ok(())
    }

    fn is_displayed(&self) -> Result<bool> {
        Ok(self.inner.displayed.get())
    }
}

/// A browser tab that serves prebuilt documents by URL
pub struct FakePage {
    sites: HashMap<String, Box<dyn Fn() -> FakeNode>>,
    current: RefCell<FakeNode>,
    visited: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self { sites: HashMap::new(), current: RefCell::new(FakeNode::new("html")), visited: RefCell::new(Vec::new()) }
    }

    /// Serve a fresh copy of `build()` every time `url` is loaded
    pub fn serve(mut self, url: impl Into<String>, build: impl Fn() -> FakeNode + 'static) -> Self {
        self.sites.insert(url.into(), Box::new(build));
        self
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn document(&self) -> FakeNode {
        self.current.borrow().clone()
    }
}

impl PageHandle for FakePage {
    type Element<'a> = FakeNode;

    fn goto(&self, url: &str) -> Result<()> {
        self.visited.borrow_mut().push(url.to_string());
        let build = self
            .sites
            .get(url)
            .ok_or_else(|| ScrapeError::NavigationFailed(format!("net::ERR_NAME_NOT_RESOLVED at {}", url)))?;
        *self.current.borrow_mut() = build();
        Ok(())
    }

    fn find(&self, selector: &str) -> Result<FakeNode> {
        self.document().find(selector)
    }

    fn find_all(&self, selector: &str) -> Result<Vec<FakeNode>> {
        self.document().find_all(selector)
    }
}

/// A product tile in the demo shop's markup
pub fn tile(title: &str, description: &str, price: &str, stars: usize, reviews: Option<&str>) -> FakeNode {
    let stars = (0..stars).map(|_| FakeNode::new("ws-icon ws-icon-star")).collect();

    let mut caption = FakeNode::new("caption")
        .with_child(FakeNode::new("price float-end card-title pull-right").with_text(price))
        .with_child(
            FakeNode::new("title")
                .with_text(&format!("{}...", title.chars().take(10).collect::<String>()))
                .with_prop("title", title),
        )
        .with_child(FakeNode::new("description card-text").with_text(description));

    let mut ratings = FakeNode::new("ratings");
    if let Some(reviews) = reviews {
        ratings = ratings.with_child(FakeNode::new("review-count float-end").with_text(reviews));
    }
    ratings = ratings.with_child(FakeNode::new("stars").with_children(stars));

    caption = caption.with_child(ratings);
    FakeNode::new("thumbnail card").with_child(caption)
}

/// A well-formed tile numbered `n`
pub fn sample_tile(n: usize) -> FakeNode {
    tile(
        &format!("Product {}", n),
        &format!("Description of product {}", n),
        &format!("${}.99", 100 + n),
        n % 5 + 1,
        Some(&format!("{} reviews", n)),
    )
}

pub fn cookie_banner() -> FakeNode {
    FakeNode::new("cookie-banner").with_child(FakeNode::new("acceptCookies btn").with_text("Accept & Continue"))
}

/// A shop page: `initial` tiles rendered up front, then one batch appended per
/// "load more" click. The button hides itself after the last batch. With
/// no batches the button is not rendered at all.
pub fn shop_page(initial: Vec<FakeNode>, batches: Vec<Vec<FakeNode>>, banner: Option<FakeNode>) -> FakeNode {
    let container = FakeNode::new("row ecomerce-items").with_children(initial);
    let mut body = FakeNode::new("body");
    if let Some(banner) = banner {
        body = body.with_child(banner);
    }
    body = body.with_child(container.clone());

    if !batches.is_empty() {
        let batches = RefCell::new(VecDeque::from(batches));
        let button = FakeNode::new("btn btn-primary btn-lg btn-block ecomerce-items-scroll-more").on_click(
            move |button: &FakeNode| {
                let mut batches = batches.borrow_mut();
                if let Some(batch) = batches.pop_front() {
                    container.append(batch);
                }
                if batches.is_empty() {
                    button.set_displayed(false);
                }
            },
        );
        body = body.with_child(button);
    }

    FakeNode::new("html").with_child(body)
}
