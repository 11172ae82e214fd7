// src/table/columns.rs
//! `only` / `except` → concrete column indices.

use crate::config::options::{ColumnSpec, TableOptions};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns {
    /// Output order; duplicates allowed.
    pub indices: Vec<usize>,
    /// Emit a flat sequence instead of one-cell rows.
    pub flatten: bool,
}

/// Resolve the column selection against the header row's text (`None` marks
/// colspan placeholders, which have no name).
pub fn resolve(opts: &TableOptions, header: &[Option<String>]) -> Result<Columns> {
    let only = indices_for(&opts.only, header)?;
    let except = match &opts.except {
        Some(spec) => indices_for(spec, header)?,
        None => Vec::new(),
    };

    let indices: Vec<usize> = only.into_iter().filter(|i| !except.contains(i)).collect();
    let single_spec = opts.only.is_single() && opts.except.as_ref().is_none_or(ColumnSpec::is_single);

    Ok(Columns { flatten: single_spec && indices.len() == 1, indices })
}

fn indices_for(spec: &ColumnSpec, header: &[Option<String>]) -> Result<Vec<usize>> {
    match spec {
        ColumnSpec::All => Ok((0..header.len()).collect()),
        ColumnSpec::Index(i) => Ok(vec![*i]),
        ColumnSpec::Indices(ix) => Ok(ix.clone()),
        ColumnSpec::Name(name) => Ok(vec![position(name, header)?]),
        ColumnSpec::Names(names) => names.iter().map(|n| position(n, header)).collect(),
    }
}

fn position(name: &str, header: &[Option<String>]) -> Result<usize> {
    header
        .iter()
        .position(|h| h.as_deref() == Some(name))
        .ok_or_else(|| Error::UnknownColumn {
            name: s!(name),
            known: header.iter().flatten().cloned().collect(),
        })
}
