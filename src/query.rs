// src/query.rs
//! Query facade: `all` / `find` / `find_one` over anything implementing [`Root`].
//!
//! Selectors go through [`crate::selector::compile`] first, so raw strings and
//! structured [`Sel`] descriptions are accepted everywhere.

use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::core::html::{self, Root};
use crate::core::sanitize::normalize_ws;
use crate::error::{QueryError, Result};
use crate::selector::{compile, Sel};

/// Every node matching `selector`, in the matcher's (document) order.
pub fn all<'a, R: Root<'a>>(root: R, selector: impl Into<Sel>) -> Result<Vec<ElementRef<'a>>> {
    let css = compile(&selector.into());
    let compiled = parse_selector(&css)?;
    let found = root.select_all(&compiled, &css)?;
    debug!(selector = %css, count = found.len(), "query");
    Ok(found)
}

/// First match, or `None`.
pub fn find<'a, R: Root<'a>>(root: R, selector: impl Into<Sel>) -> Result<Option<ElementRef<'a>>> {
    Ok(all(root, selector)?.into_iter().next())
}

/// Exactly one match. Zero or several matches are a [`QueryError`]; the
/// several-matches message carries the outer HTML of every match.
pub fn find_one<'a, R: Root<'a>>(root: R, selector: impl Into<Sel>) -> Result<ElementRef<'a>> {
    let sel = selector.into();
    let found = all(root, &sel)?;
    match found.as_slice() {
        [one] => Ok(*one),
        [] => Err(QueryError::NotFound { selector: compile(&sel) }.into()),
        many => Err(QueryError::Ambiguous {
            selector: compile(&sel),
            count: many.len(),
            rendered: html::render(many),
        }
        .into()),
    }
}

/// Whitespace-normalized text of a node.
pub fn text(el: ElementRef<'_>) -> String {
    normalize_ws(&html::text_of(el, " "))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    html::attr(el, name)
}

fn parse_selector(css: &str) -> Result<Selector, QueryError> {
    Selector::parse(css).map_err(|e| QueryError::InvalidSelector {
        selector: s!(css),
        message: e.to_string(),
    })
}
