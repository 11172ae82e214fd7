// src/form/mod.rs
//! # Form field materialization
//!
//! Turns the named controls of a form-like subtree into a [`FieldMap`] the way
//! a browser submission (plus the usual bracket-name convention) would see it.
//!
//! ## Value rules
//! - **Text-like inputs** contribute their `value` attribute; no `value`, no field.
//! - **Checkboxes** named `x[]` collect the values of every checked box (empty
//!   list when none are). Plain names keep the *last* checked value, else null.
//! - **Radios** behave like plain-named checkboxes, even when named `x[]`.
//! - **Hidden + toggle pairing**: a hidden input sharing the path of a radio or
//!   plain-named checkbox is the fallback for the unchecked state; a checked
//!   toggle always wins, regardless of document order. Inside such a pair
//!   `true` / `false` are booleans. A hidden input on the path of an `x[]`
//!   checkbox is ignored.
//! - **Selects** give the selected option's `value` (or trimmed text). A disabled
//!   selected option counts as no selection; a disabled select is null.
//!   `multiple` selects give a list.
//! - **Textareas** give their trimmed text.
//! - **Disabled** controls contribute nothing, except selects (see above) and a
//!   hidden input acting as a toggle fallback.
//!
//! ## Names
//! Dashes become underscores and `a[b][c]` nests (see [`path`]). A path used both
//! as a value and as a namespace fails with [`crate::Error::MergeConflict`].
//!
//! Elements are visited once in document order; overriding and appending are
//! properties of the path insertion, there is no separate resolution phase.

pub mod control;
pub mod path;
pub mod value;

use std::collections::HashSet;

use scraper::ElementRef;
use tracing::{debug, trace};

use crate::config::consts::{FORM_CONTROL_SELECTOR, FORM_SELECTOR, OPTION_SELECTOR};
use crate::core::html::{attr, has_attr, Root};
use crate::error::Result;
use crate::query;
use crate::selector::Sel;

use control::{classify, Control, Field};
use path::{insert, Mode};
pub use value::{FieldMap, FieldValue};

/// Value browsers submit for a checked toggle without a `value` attribute.
const DEFAULT_TOGGLE_VALUE: &str = "on";

/// Materialize every named control under `root`.
pub fn materialize<'a, R: Root<'a>>(root: R) -> Result<FieldMap> {
    let elements = query::all(root, FORM_CONTROL_SELECTOR)?;
    let fields: Vec<Field<'a>> = elements.into_iter().filter_map(classify).collect();

    let scalar_toggles = paths_where(&fields, Field::is_scalar_toggle);
    let list_toggles = paths_where(&fields, Field::is_list_toggle);
    let hiddens = paths_where(&fields, Field::is_hidden);

    let mut state = Fold { out: FieldMap::new(), checked: HashSet::new() };
    for field in &fields {
        let path = field.name.path.as_slice();
        let pairing = if field.is_hidden() {
            if list_toggles.contains(path) || (field.name.list && scalar_toggles.contains(path)) {
                Pairing::Shadowed
            } else if scalar_toggles.contains(path) {
                Pairing::Paired
            } else {
                Pairing::Alone
            }
        } else if field.is_scalar_toggle() && hiddens.contains(path) {
            Pairing::Paired
        } else {
            Pairing::Alone
        };
        state.contribute(field, pairing)?;
    }

    debug!(controls = fields.len(), keys = state.out.len(), "materialized form fields");
    Ok(state.out)
}

/// Find exactly one element matching `selector` (default `form`) and materialize it.
pub fn materialize_form<'a, R: Root<'a>>(root: R, selector: Option<Sel>) -> Result<FieldMap> {
    let form = query::find_one(root, selector.unwrap_or_else(|| Sel::from(FORM_SELECTOR)))?;
    materialize(form)
}

fn paths_where<'f, 'a>(fields: &'f [Field<'a>], keep: impl Fn(&Field<'a>) -> bool) -> HashSet<&'f [String]> {
    fields.iter().filter(|f| keep(*f)).map(|f| f.name.path.as_slice()).collect()
}

/// How a field relates to hidden inputs and toggles on the same path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pairing {
    Alone,
    /// Hidden fallback of a scalar toggle, or a scalar toggle that has one.
    Paired,
    /// Hidden input next to a `[]` checkbox (or itself `[]`-named); contributes nothing.
    Shadowed,
}

struct Fold {
    out: FieldMap,
    /// Scalar toggle paths that have seen a checked box.
    checked: HashSet<Vec<String>>,
}

impl Fold {
    fn contribute(&mut self, field: &Field<'_>, pairing: Pairing) -> Result<()> {
        let path = &field.name.path;
        let paired = pairing == Pairing::Paired;
        let exempt = field.control.resolves_when_disabled() || (paired && field.is_hidden());
        if field.disabled && !exempt {
            trace!(name = field.raw_name, "skipping disabled control");
            return Ok(());
        }
        trace!(name = field.raw_name, control = ?field.control, ?pairing, "field");

        match &field.control {
            Control::Unsupported => Ok(()),
            Control::TextInput { value } => match value {
                Some(v) => self.put(field, FieldValue::from(*v)),
                None => Ok(()),
            },
            Control::Hidden { value } => {
                let Some(v) = value else { return Ok(()) };
                match pairing {
                    Pairing::Alone => self.put(field, FieldValue::from(*v)),
                    Pairing::Shadowed => Ok(()),
                    Pairing::Paired if self.checked.contains(path) => Ok(()),
                    Pairing::Paired => insert(&mut self.out, path, boolish(v), Mode::Set),
                }
            }
            Control::Checkbox { value, checked } if field.name.list => {
                insert(&mut self.out, path, FieldValue::List(Vec::new()), Mode::SetIfAbsent)?;
                if *checked {
                    insert(&mut self.out, path, toggle_value(*value, false), Mode::Append)?;
                }
                Ok(())
            }
            // radios are scalar even when named `x[]`
            Control::Checkbox { value, checked } | Control::Radio { value, checked } => {
                if *checked {
                    self.checked.insert(path.clone());
                    insert(&mut self.out, path, toggle_value(*value, paired), Mode::Set)
                } else {
                    insert(&mut self.out, path, FieldValue::Null, Mode::SetIfAbsent)
                }
            }
            Control::Select(el) => {
                let value = if field.disabled { FieldValue::Null } else { select_value(*el)? };
                self.put(field, value)
            }
            Control::MultiSelect(el) => {
                let values = if field.disabled { Vec::new() } else { multi_select_values(*el)? };
                if field.name.list {
                    insert(&mut self.out, path, FieldValue::List(Vec::new()), Mode::SetIfAbsent)?;
                    for v in values {
                        insert(&mut self.out, path, v, Mode::Append)?;
                    }
                    Ok(())
                } else {
                    insert(&mut self.out, path, FieldValue::List(values), Mode::Set)
                }
            }
            Control::TextArea(el) => {
                let text: String = el.text().collect();
                self.put(field, FieldValue::from(text.trim()))
            }
        }
    }

    /// Scalar names override, `[]` names append.
    fn put(&mut self, field: &Field<'_>, value: FieldValue) -> Result<()> {
        let mode = if field.name.list { Mode::Append } else { Mode::Set };
        insert(&mut self.out, &field.name.path, value, mode)
    }
}

/* ---------- value helpers ---------- */

fn toggle_value(value: Option<&str>, coerce: bool) -> FieldValue {
    match value {
        None => FieldValue::from(DEFAULT_TOGGLE_VALUE),
        Some(v) if coerce => boolish(v),
        Some(v) => FieldValue::from(v),
    }
}

/// `true` / `false` as booleans, anything else as text.
fn boolish(v: &str) -> FieldValue {
    match v {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        other => FieldValue::from(other),
    }
}

fn selected_options(select: ElementRef<'_>) -> Result<Vec<ElementRef<'_>>> {
    let selected = Sel::list([Sel::tag(OPTION_SELECTOR), Sel::attr("selected", true)]);
    query::all(select, selected)
}

fn option_value(option: ElementRef<'_>) -> FieldValue {
    match attr(option, "value") {
        Some(v) => FieldValue::from(v),
        None => FieldValue::from(query::text(option)),
    }
}

fn select_value(select: ElementRef<'_>) -> Result<FieldValue> {
    // with several marked, the last one is what a browser shows
    Ok(match selected_options(select)?.last() {
        Some(opt) if !has_attr(*opt, "disabled") => option_value(*opt),
        _ => FieldValue::Null,
    })
}

fn multi_select_values(select: ElementRef<'_>) -> Result<Vec<FieldValue>> {
    Ok(selected_options(select)?
        .into_iter()
        .filter(|opt| !has_attr(*opt, "disabled"))
        .map(option_value)
        .collect())
}
