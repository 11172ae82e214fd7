// src/selector.rs
//! Structured selector descriptions and their compiler.
//!
//! A [`Sel`] is either a raw selector string (used verbatim) or a tree of
//! tags, attribute filters and element groups. [`compile`] flattens the tree
//! into one selector string for the matcher:
//!
//! ```text
//! [Element("p", [Attr(id, "x"), Attr(class, "y")])]   →  p[id='x'][class='y']
//! [Tag("form"), Attr(test_role, "login")]              →  form[test-role='login']
//! [Tag("input"), Attr(disabled, false)]                →  input
//! ```
//!
//! Attribute filters attach directly to whatever precedes them; tags, element
//! groups and nested lists start a new descendant step. Only descendant
//! composition is expressible; anything fancier goes in a raw string.

use std::fmt;

use crate::core::sanitize::{dasherize, normalize_ws};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sel {
    /// Used verbatim.
    Raw(String),
    /// Bare element name.
    Tag(String),
    /// Attribute filter; the key is written with underscores and compiled with dashes.
    Attr(String, AttrValue),
    /// Element name immediately followed by its nested description.
    Element(String, Vec<Sel>),
    /// Ordered entries, composed as descendants.
    List(Vec<Sel>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// `[key='value']`
    Is(String),
    /// `[key]`
    Present,
    /// Compiles to nothing, so callers can toggle a filter with a computed bool.
    Omit,
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        if b { AttrValue::Present } else { AttrValue::Omit }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self { AttrValue::Is(s!(s)) }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self { AttrValue::Is(s) }
}

impl Sel {
    pub fn tag(name: impl Into<String>) -> Self {
        Sel::Tag(name.into())
    }

    pub fn attr(key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Sel::Attr(key.into(), value.into())
    }

    pub fn element(name: impl Into<String>, nested: impl IntoIterator<Item = Sel>) -> Self {
        Sel::Element(name.into(), nested.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = Sel>) -> Self {
        Sel::List(items.into_iter().collect())
    }

    pub fn compile(&self) -> String {
        compile(self)
    }
}

impl From<&str> for Sel {
    fn from(s: &str) -> Self { Sel::Raw(s!(s)) }
}

impl From<String> for Sel {
    fn from(s: String) -> Self { Sel::Raw(s) }
}

impl From<&String> for Sel {
    fn from(s: &String) -> Self { Sel::Raw(s.clone()) }
}

impl From<&Sel> for Sel {
    fn from(s: &Sel) -> Self { s.clone() }
}

impl From<Vec<Sel>> for Sel {
    fn from(items: Vec<Sel>) -> Self { Sel::List(items) }
}

impl fmt::Display for Sel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&compile(self))
    }
}

/// Compile a description into a selector string. Raw strings come back unchanged.
pub fn compile(desc: &Sel) -> String {
    match desc {
        Sel::Raw(s) => s.clone(),
        other => {
            let mut out = s!();
            reduce(other, &mut out);
            normalize_ws(&out)
        }
    }
}

fn reduce(desc: &Sel, out: &mut String) {
    match desc {
        Sel::Raw(s) | Sel::Tag(s) => {
            out.push(' ');
            out.push_str(s);
        }
        Sel::Attr(key, value) => push_attr(out, key, value),
        Sel::Element(name, nested) => {
            out.push(' ');
            out.push_str(name);
            for entry in nested {
                reduce(entry, out);
            }
        }
        Sel::List(items) => {
            out.push(' ');
            for entry in items {
                reduce(entry, out);
            }
        }
    }
}

// NOTE: quotes inside values are not escaped
fn push_attr(out: &mut String, key: &str, value: &AttrValue) {
    let key = dasherize(key);
    match value {
        AttrValue::Omit => {}
        AttrValue::Present => out.push_str(&join!("[", &key, "]")),
        AttrValue::Is(v) => out.push_str(&join!("[", &key, "='", v, "']")),
    }
}
