// src/form/control.rs
//! Classification of named form elements.
//!
//! Each `input` / `select` / `textarea` is classified exactly once into a
//! [`Control`]; the materializer then dispatches on that variant only.

use scraper::ElementRef;

use crate::config::consts::BUTTON_INPUT_TYPES;
use crate::core::html::{attr, has_attr, tag};

use super::path::{parse_name, FieldName};

#[derive(Clone, Debug)]
pub enum Control<'a> {
    /// Any input that is not hidden, a toggle or a button.
    TextInput { value: Option<&'a str> },
    Hidden { value: Option<&'a str> },
    Checkbox { value: Option<&'a str>, checked: bool },
    Radio { value: Option<&'a str>, checked: bool },
    Select(ElementRef<'a>),
    MultiSelect(ElementRef<'a>),
    TextArea(ElementRef<'a>),
    /// Buttons and unknown tags; never contribute.
    Unsupported,
}

impl Control<'_> {
    /// Selects still produce a value (null / empty list) when disabled.
    pub fn resolves_when_disabled(&self) -> bool {
        matches!(self, Control::Select(_) | Control::MultiSelect(_))
    }
}

/// A named form element, classified.
#[derive(Clone, Debug)]
pub struct Field<'a> {
    pub raw_name: &'a str,
    pub name: FieldName,
    pub disabled: bool,
    pub control: Control<'a>,
}

impl Field<'_> {
    /// Checkbox named `x[]`: collects every checked value.
    pub fn is_list_toggle(&self) -> bool {
        self.name.list && matches!(self.control, Control::Checkbox { .. })
    }

    /// Radio (any name) or plain-named checkbox: last checked value wins.
    pub fn is_scalar_toggle(&self) -> bool {
        match self.control {
            Control::Radio { .. } => true,
            Control::Checkbox { .. } => !self.name.list,
            _ => false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self.control, Control::Hidden { .. })
    }
}

/// `None` for elements without a `name`.
pub fn classify(el: ElementRef<'_>) -> Option<Field<'_>> {
    let raw_name = attr(el, "name")?;
    let control = match tag(el).as_str() {
        "input" => classify_input(el),
        "select" if has_attr(el, "multiple") => Control::MultiSelect(el),
        "select" => Control::Select(el),
        "textarea" => Control::TextArea(el),
        _ => Control::Unsupported,
    };

    Some(Field {
        raw_name,
        name: parse_name(raw_name),
        disabled: has_attr(el, "disabled"),
        control,
    })
}

fn classify_input(el: ElementRef<'_>) -> Control<'_> {
    let value = attr(el, "value");
    let kind = attr(el, "type").map(|t| t.trim().to_ascii_lowercase()).unwrap_or_default();

    match kind.as_str() {
        "checkbox" => Control::Checkbox { value, checked: has_attr(el, "checked") },
        "radio" => Control::Radio { value, checked: has_attr(el, "checked") },
        "hidden" => Control::Hidden { value },
        k if BUTTON_INPUT_TYPES.contains(&k) => Control::Unsupported,
        _ => Control::TextInput { value },
    }
}
