// src/table/cells.rs
//! Colspan expansion and per-cell value resolution.

use scraper::ElementRef;
use tracing::debug;

use crate::config::consts::{CELL_TAGS, MAX_COLSPAN, TEXT_SEP};
use crate::config::options::Update;
use crate::core::html::{attr, child_elements, tag, text_of};
use crate::core::sanitize::parse_span;
use crate::error::{Error, Result};
use crate::form;

/// One column position of an expanded row.
#[derive(Clone, Copy, Debug)]
pub enum Slot<'a> {
    Cell(ElementRef<'a>),
    /// Covered by a preceding cell's colspan; always null.
    Span,
}

impl Slot<'_> {
    /// Plain text of the cell; `None` for span placeholders.
    pub fn text(&self) -> Option<String> {
        match self {
            Slot::Cell(el) => Some(text_of(*el, TEXT_SEP)),
            Slot::Span => None,
        }
    }
}

/// Direct `td`/`th` children of a row, each followed by `colspan - 1` placeholders.
pub fn expand_row(row: ElementRef<'_>) -> Vec<Slot<'_>> {
    let mut out = Vec::new();
    for cell in child_elements(row) {
        if !CELL_TAGS.contains(&tag(cell).as_str()) {
            continue;
        }
        let span = parse_span(attr(cell, "colspan")).min(MAX_COLSPAN);
        out.push(Slot::Cell(cell));
        out.extend((1..span).map(|_| Slot::Span));
    }
    out
}

/// Value of a real cell.
///
/// Non-empty text wins. An empty cell holding exactly one form field takes that
/// field's value (lists and nested maps in their JSON form); otherwise "",
/// including when the cell's field names conflict.
pub fn resolve_cell(cell: ElementRef<'_>, update: Option<&Update>) -> Result<String> {
    let text = text_of(cell, TEXT_SEP);
    let value = if !text.is_empty() {
        text
    } else {
        match form::materialize(cell) {
            Ok(fields) => match (fields.len(), fields.values().next()) {
                (1, Some(v)) => v.to_string(),
                _ => s!(),
            },
            // conflicting names inside one cell never make a single value
            Err(Error::MergeConflict { existing, incoming }) => {
                debug!(%existing, %incoming, "cell fields conflict; resolving to empty");
                s!()
            }
            Err(e) => return Err(e),
        }
    };

    Ok(match update {
        Some(f) => f(&value),
        None => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse_fragment;
    use scraper::Selector;

    fn with_row(html: &str, f: impl FnOnce(ElementRef<'_>)) {
        let doc = parse_fragment(html);
        let sel = Selector::parse("tr").unwrap();
        f(doc.select(&sel).next().unwrap());
    }

    #[test]
    fn colspan_adds_placeholders() {
        with_row("<table><tr><td colspan=2>X</td><td>Y</td><th colspan=x>Z</th></tr></table>", |row| {
            let slots = expand_row(row);
            let texts: Vec<Option<String>> = slots.iter().map(Slot::text).collect();
            assert_eq!(texts, vec![Some(s!("X")), None, Some(s!("Y")), Some(s!("Z"))]);
        });
    }

    #[test]
    fn huge_colspan_is_capped() {
        with_row("<table><tr><td colspan=99999999>X</td></tr></table>", |row| {
            assert_eq!(expand_row(row).len(), MAX_COLSPAN);
        });
    }

    #[test]
    fn empty_cells_fall_back_to_single_field() {
        with_row(
            r#"<table><tr>
                <td> A </td>
                <td><input name="qty" value="3"></td>
                <td><input name="a" value="1"><input name="b" value="2"></td>
                <td></td>
            </tr></table>"#,
            |row| {
                let values: Vec<String> = expand_row(row)
                    .into_iter()
                    .map(|s| match s {
                        Slot::Cell(el) => resolve_cell(el, None).unwrap(),
                        Slot::Span => s!("-"),
                    })
                    .collect();
                assert_eq!(values, vec!["A", "3", "", ""]);
            },
        );
    }
}
