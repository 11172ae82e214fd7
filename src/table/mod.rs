// src/table/mod.rs
//! # Table extraction
//!
//! The first row is the header row; every other row is a body row.
//!
//! 1. Each row is expanded into column slots: a cell with `colspan = N` is
//!    followed by `N - 1` null placeholders, so indices line up across rows.
//! 2. `only` / `except` resolve (by index or header text) into the output columns.
//! 3. Each selected real cell resolves to its text, or to the value of the single
//!    form field inside it (see [`cells::resolve_cell`]). `update` runs last.
//! 4. Lists: optional header row + body rows, flattened when a single column was
//!    asked for. Maps: one `header → value` map per body row; columns that sit
//!    under a header cell's colspan have no key and are left out.

pub mod cells;
pub mod columns;

use indexmap::IndexMap;
use scraper::ElementRef;
use serde::Serialize;
use tracing::debug;

use crate::config::consts::{ROW_SELECTOR, TABLE_SELECTOR};
use crate::config::options::{OutputShape, TableOptions, Update};
use crate::core::html::{tag, Root};
use crate::error::Result;
use crate::query;
use crate::selector::Sel;

use cells::{expand_row, resolve_cell, Slot};
use columns::Columns;

/// A cell value; `None` for colspan placeholders and columns a row does not reach.
pub type Cell = Option<String>;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedTable {
    Rows(Vec<Vec<Cell>>),
    /// Single selected column, flattened.
    Column(Vec<Cell>),
    Maps(Vec<IndexMap<String, Cell>>),
}

impl ExtractedTable {
    pub fn len(&self) -> usize {
        match self {
            ExtractedTable::Rows(r) => r.len(),
            ExtractedTable::Column(c) => c.len(),
            ExtractedTable::Maps(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Row-major view. Maps get a leading row of their keys.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        match self {
            ExtractedTable::Rows(r) => r.clone(),
            ExtractedTable::Column(c) => c.iter().map(|v| vec![v.clone()]).collect(),
            ExtractedTable::Maps(maps) => {
                let mut out = Vec::with_capacity(maps.len() + 1);
                if let Some(first) = maps.first() {
                    out.push(first.keys().cloned().map(Some).collect());
                }
                out.extend(maps.iter().map(|m| m.values().cloned().collect()));
                out
            }
        }
    }
}

/// Extract from every `tr` under `root`.
pub fn extract<'a, R: Root<'a>>(root: R, opts: &TableOptions) -> Result<ExtractedTable> {
    let rows = query::all(root, ROW_SELECTOR)?;
    extract_rows(&rows, opts)
}

/// Find exactly one table matching `selector` (default `table`) and extract its
/// own rows; rows of nested tables are left out.
pub fn extract_table<'a, R: Root<'a>>(
    root: R,
    selector: Option<Sel>,
    opts: &TableOptions,
) -> Result<ExtractedTable> {
    let table = query::find_one(root, selector.unwrap_or_else(|| Sel::from(TABLE_SELECTOR)))?;
    let rows: Vec<ElementRef<'a>> = query::all(table, ROW_SELECTOR)?
        .into_iter()
        .filter(|row| owning_table(*row).is_some_and(|t| t.id() == table.id()))
        .collect();
    extract_rows(&rows, opts)
}

/// Extract from explicit rows; the first one is the header row.
pub fn extract_rows(rows: &[ElementRef<'_>], opts: &TableOptions) -> Result<ExtractedTable> {
    let expanded: Vec<Vec<Slot<'_>>> = rows.iter().map(|r| expand_row(*r)).collect();
    let (header, body) = match expanded.split_first() {
        Some((h, b)) => (h.as_slice(), b),
        None => (&[][..], &[][..]),
    };

    let names: Vec<Cell> = header.iter().map(Slot::text).collect();
    let columns = columns::resolve(opts, &names)?;
    debug!(rows = rows.len(), columns = ?columns.indices, flatten = columns.flatten, "extracting table");

    let update = opts.update.as_ref();
    let header_values = resolve_row(header, &columns, update)?;
    let body_values = body
        .iter()
        .map(|row| resolve_row(row, &columns, update))
        .collect::<Result<Vec<_>>>()?;

    Ok(match opts.shape {
        OutputShape::Lists => {
            let mut out = Vec::with_capacity(body_values.len() + 1);
            if opts.headers && !rows.is_empty() {
                out.push(header_values);
            }
            out.extend(body_values);
            if columns.flatten {
                ExtractedTable::Column(out.into_iter().map(|r| r.into_iter().next().flatten()).collect())
            } else {
                ExtractedTable::Rows(out)
            }
        }
        OutputShape::Maps => {
            // columns under a colspan placeholder have no header text and no key
            ExtractedTable::Maps(
                body_values
                    .into_iter()
                    .map(|row| {
                        header_values
                            .iter()
                            .zip(row)
                            .filter_map(|(key, value)| Some((key.clone()?, value)))
                            .collect()
                    })
                    .collect(),
            )
        }
    })
}

fn resolve_row(slots: &[Slot<'_>], columns: &Columns, update: Option<&Update>) -> Result<Vec<Cell>> {
    columns
        .indices
        .iter()
        .map(|&i| match slots.get(i) {
            Some(Slot::Cell(el)) => resolve_cell(*el, update).map(Some),
            Some(Slot::Span) | None => Ok(None),
        })
        .collect()
}

/// Nearest `table` ancestor of a row.
fn owning_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| tag(*el) == "table")
}
