//! Thin wrapper over the html5ever-backed `kuchikikiki` DOM.
//!
//! Queries take CSS selectors. A selector that fails to compile matches
//! nothing.

use kuchikikiki::NodeRef;
use kuchikikiki::traits::*;

/// Parsed HTML document
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse with HTML5 error recovery, never fails
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikikiki::parse_html().one(html),
        }
    }

    pub fn root(&self) -> Element {
        Element(self.root.clone())
    }

    pub fn select(&self, selectors: &str) -> Vec<Element> {
        self.root().select(selectors)
    }

    pub fn select_first(&self, selectors: &str) -> Option<Element> {
        self.root().select_first(selectors)
    }
}

/// Handle to a node of a [`Document`], usually an element
#[derive(Debug, Clone)]
pub struct Element(NodeRef);

impl Element {
    /// Lowercase tag name, empty for anything that is not an element
    pub fn name(&self) -> String {
        self.0
            .as_element()
            .map(|e| e.name.local.to_string())
            .unwrap_or_default()
    }

    pub fn attr(&self, key: &str) -> Option<String> {
        let element = self.0.as_element()?;
        let attributes = element.attributes.borrow();
        attributes.get(key).map(str::to_string)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Child elements, text nodes skipped
    pub fn children(&self) -> impl Iterator<Item = Element> {
        self.0.children().filter(is_element).map(Element)
    }

    /// Enclosing elements, innermost first
    pub fn ancestors(&self) -> impl Iterator<Item = Element> {
        self.0.ancestors().filter(is_element).map(Element)
    }

    pub fn next_sibling_element(&self) -> Option<Element> {
        self.0.following_siblings().find(is_element).map(Element)
    }

    /// Concatenated text of every descendant text node
    pub fn text(&self) -> String {
        self.0.text_contents()
    }

    /// Matching descendants in document order, not including `self`
    pub fn select(&self, selectors: &str) -> Vec<Element> {
        match self.0.descendants().select(selectors) {
            Ok(matches) => matches.map(|e| Element(e.as_node().clone())).collect(),
            Err(()) => {
                tracing::warn!("Invalid selector '{}'", selectors);
                Vec::new()
            }
        }
    }

    pub fn select_first(&self, selectors: &str) -> Option<Element> {
        self.select(selectors).into_iter().next()
    }
}

fn is_element(node: &NodeRef) -> bool {
    node.as_element().is_some()
}
