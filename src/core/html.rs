// src/core/html.rs
//! Thin layer over `scraper`: parsing, searchable roots, text and attribute access.
//!
//! Everything above this module talks about `ElementRef`s and compiled selector
//! strings; parsing and matching are delegated to `scraper` untouched.

use scraper::{ElementRef, Html, Selector};

use crate::error::QueryError;

/// Parse a full document (`<html>` is synthesized when missing).
pub fn parse_document(input: &str) -> Html {
    Html::parse_document(input)
}

/// Parse a fragment of sibling nodes.
pub fn parse_fragment(input: &str) -> Html {
    Html::parse_fragment(input)
}

/// Anything the matcher can search.
///
/// - `&Html`: the whole tree.
/// - `ElementRef`: the element itself (when it matches) followed by its descendants.
/// - slices of `ElementRef`: each root in turn, results concatenated.
/// - `Option<R>`: `None` is a missing tree and fails with [`QueryError::MissingTree`].
pub trait Root<'a> {
    /// Matches in document order. `css` is the compiled selector, used for error context only.
    fn select_all(&self, selector: &Selector, css: &str) -> Result<Vec<ElementRef<'a>>, QueryError>;
}

impl<'a> Root<'a> for &'a Html {
    fn select_all(&self, selector: &Selector, _css: &str) -> Result<Vec<ElementRef<'a>>, QueryError> {
        Ok(self.select(selector).collect())
    }
}

impl<'a> Root<'a> for ElementRef<'a> {
    fn select_all(&self, selector: &Selector, _css: &str) -> Result<Vec<ElementRef<'a>>, QueryError> {
        let mut out = Vec::new();
        if selector.matches(self) {
            out.push(*self);
        }
        // scraper's own select() skips the scope element
        out.extend(self.select(selector));
        Ok(out)
    }
}

impl<'a> Root<'a> for &[ElementRef<'a>] {
    fn select_all(&self, selector: &Selector, css: &str) -> Result<Vec<ElementRef<'a>>, QueryError> {
        let mut out = Vec::new();
        for root in self.iter() {
            out.extend(root.select_all(selector, css)?);
        }
        Ok(out)
    }
}

impl<'a> Root<'a> for &Vec<ElementRef<'a>> {
    fn select_all(&self, selector: &Selector, css: &str) -> Result<Vec<ElementRef<'a>>, QueryError> {
        self.as_slice().select_all(selector, css)
    }
}

impl<'a, R: Root<'a>> Root<'a> for Option<R> {
    fn select_all(&self, selector: &Selector, css: &str) -> Result<Vec<ElementRef<'a>>, QueryError> {
        match self {
            Some(root) => root.select_all(selector, css),
            None => Err(QueryError::MissingTree { selector: s!(css) }),
        }
    }
}

/* ---------- node accessors ---------- */

/// Text pieces of a subtree, each trimmed, empty pieces dropped, joined with `sep`.
pub fn text_of(el: ElementRef<'_>, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

pub fn has_attr(el: ElementRef<'_>, name: &str) -> bool {
    el.value().attr(name).is_some()
}

/// Lowercased tag name.
pub fn tag(el: ElementRef<'_>) -> String {
    el.value().name().to_ascii_lowercase()
}

/// Direct element children, document order.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Outer HTML of every node, one per line. Used for error messages.
pub fn render(nodes: &[ElementRef<'_>]) -> String {
    nodes.iter().map(|n| n.html()).collect::<Vec<_>>().join("\n")
}
