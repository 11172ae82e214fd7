// src/form/path.rs
//! Field names → key paths, and path insertion into a [`FieldMap`].
//!
//! `person[address][city]` becomes `["person", "address", "city"]`. A trailing
//! `[]` is the list marker and is not part of the path. Dashes become
//! underscores before tokenizing. Names that do not tokenize cleanly
//! (`a[b`, `[x]`, `a]b`) are kept whole as a single key.

use crate::config::consts::LIST_MARKER;
use crate::core::sanitize::underscore;
use crate::error::{Error, Result};

use super::value::{FieldMap, FieldValue};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldName {
    pub path: Vec<String>,
    /// Name ended in `[]`.
    pub list: bool,
}

pub fn parse_name(raw: &str) -> FieldName {
    let name = underscore(raw);
    match tokenize(&name) {
        Some(mut path) => {
            let list = name.ends_with(LIST_MARKER) && path.len() > 1;
            if list {
                path.pop();
            }
            FieldName { path, list }
        }
        None => FieldName { path: vec![name], list: false },
    }
}

fn tokenize(name: &str) -> Option<Vec<String>> {
    let (base, mut rest) = match name.find('[') {
        Some(i) => (&name[..i], &name[i..]),
        None if name.contains(']') => return None,
        None => return Some(vec![s!(name)]),
    };
    if base.is_empty() || base.contains(']') {
        return None;
    }

    let mut path = vec![s!(base)];
    while !rest.is_empty() {
        let after = rest.strip_prefix('[')?;
        let close = after.find(']')?;
        let segment = &after[..close];
        if segment.contains('[') {
            return None;
        }
        path.push(s!(segment));
        rest = &after[close + 1..];
    }
    Some(path)
}

/// `["a", "b", "c"]` → `a[b][c]`
pub fn render_path(path: &[String]) -> String {
    let mut out = path.first().cloned().unwrap_or_default();
    for seg in path.iter().skip(1) {
        out.push_str(&join!("[", seg, "]"));
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Last write wins.
    Set,
    /// Only if nothing is there yet.
    SetIfAbsent,
    /// Push onto the list at the path (a non-list value there is replaced).
    Append,
}

/// Insert `value` at `path`, creating intermediate maps on demand.
///
/// Fails with [`Error::MergeConflict`] when a prefix of `path` already holds a
/// value, or when `path` itself already holds nested fields.
pub fn insert(map: &mut FieldMap, path: &[String], value: FieldValue, mode: Mode) -> Result<()> {
    insert_at(map, path, 0, value, mode)
}

fn insert_at(
    map: &mut FieldMap,
    path: &[String],
    depth: usize,
    value: FieldValue,
    mode: Mode,
) -> Result<()> {
    let key = &path[depth];
    if depth + 1 == path.len() {
        return set_leaf(map, path, value, mode);
    }

    let slot = map
        .entry(key.clone())
        .or_insert_with(|| FieldValue::Map(FieldMap::new()));
    match slot {
        FieldValue::Map(inner) => insert_at(inner, path, depth + 1, value, mode),
        _ => Err(Error::MergeConflict {
            existing: render_path(&path[..=depth]),
            incoming: render_path(path),
        }),
    }
}

fn set_leaf(map: &mut FieldMap, path: &[String], value: FieldValue, mode: Mode) -> Result<()> {
    let key = &path[path.len() - 1];

    if let Some(FieldValue::Map(inner)) = map.get(key) {
        return Err(Error::MergeConflict {
            existing: first_leaf(path, inner),
            incoming: render_path(path),
        });
    }

    match mode {
        Mode::Set => {
            map.insert(key.clone(), value);
        }
        Mode::SetIfAbsent => {
            map.entry(key.clone()).or_insert(value);
        }
        Mode::Append => match map.get_mut(key) {
            Some(FieldValue::List(items)) => items.push(value),
            _ => {
                map.insert(key.clone(), FieldValue::List(vec![value]));
            }
        },
    }
    Ok(())
}

/// Path of the first value stored under a nested map, for conflict messages.
fn first_leaf(prefix: &[String], mut map: &FieldMap) -> String {
    let mut path = prefix.to_vec();
    while let Some((k, v)) = map.first() {
        path.push(k.clone());
        match v {
            FieldValue::Map(inner) => map = inner,
            _ => break,
        }
    }
    render_path(&path)
}
