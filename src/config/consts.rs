// src/config/consts.rs

// Forms
pub const FORM_CONTROL_SELECTOR: &str = "input[name], select[name], textarea[name]";
pub const BUTTON_INPUT_TYPES: &[&str] = &["submit", "button", "reset"];
pub const OPTION_SELECTOR: &str = "option";
pub const LIST_MARKER: &str = "[]";
pub const FORM_SELECTOR: &str = "form";

// Tables
pub const TABLE_SELECTOR: &str = "table";
pub const ROW_SELECTOR: &str = "tr";
pub const CELL_TAGS: &[&str] = &["td", "th"];
pub const MAX_COLSPAN: usize = 1000; // browsers clamp here too

// Text
pub const TEXT_SEP: &str = " ";

// Logging
pub const LOG_ENV: &str = "HTML_HARVEST_LOG";
