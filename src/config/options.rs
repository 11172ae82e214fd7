// src/config/options.rs
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Value transform applied to every resolved table value.
pub type Update = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputShape {
    /// Rows of cells (optionally with the header row).
    #[default]
    Lists,
    /// One header-keyed map per body row.
    Maps,
}

impl FromStr for OutputShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_start_matches(':').to_ascii_lowercase().as_str() {
            "lists" | "list" => Ok(OutputShape::Lists),
            "maps" | "map" => Ok(OutputShape::Maps),
            _ => Err(invalid("as", s)),
        }
    }
}

/// Which table columns to keep.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColumnSpec {
    /// Every column of the header row.
    #[default]
    All,
    Index(usize),
    /// Order and duplicates are preserved.
    Indices(Vec<usize>),
    /// Header text of one column.
    Name(String),
    Names(Vec<String>),
}

impl ColumnSpec {
    /// A single column (not a list of one). Drives output flattening.
    pub fn is_single(&self) -> bool {
        matches!(self, ColumnSpec::Index(_) | ColumnSpec::Name(_))
    }
}

impl From<usize> for ColumnSpec {
    fn from(i: usize) -> Self { ColumnSpec::Index(i) }
}

impl From<Vec<usize>> for ColumnSpec {
    fn from(v: Vec<usize>) -> Self { ColumnSpec::Indices(v) }
}

impl From<&str> for ColumnSpec {
    fn from(s: &str) -> Self { ColumnSpec::Name(s!(s)) }
}

impl From<String> for ColumnSpec {
    fn from(s: String) -> Self { ColumnSpec::Name(s) }
}

impl From<Vec<&str>> for ColumnSpec {
    fn from(v: Vec<&str>) -> Self { ColumnSpec::Names(v.into_iter().map(String::from).collect()) }
}

impl From<Vec<String>> for ColumnSpec {
    fn from(v: Vec<String>) -> Self { ColumnSpec::Names(v) }
}

/// Text form used on the command line:
/// `all` (or `:all`), `2`, `0,2,2`, `Name`, `Col 3,Col 1`.
/// A list made only of integers is read as indices, anything else as names.
impl FromStr for ColumnSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("all") || t.eq_ignore_ascii_case(":all") {
            return Ok(ColumnSpec::All);
        }
        let parts: Vec<&str> = t.split(',').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid("columns", s));
        }

        let indices: Option<Vec<usize>> = parts.iter().map(|p| p.parse().ok()).collect();
        Ok(match (indices, parts.len()) {
            (Some(ix), 1) => ColumnSpec::Index(ix[0]),
            (Some(ix), _) => ColumnSpec::Indices(ix),
            (None, 1) => ColumnSpec::Name(s!(parts[0])),
            (None, _) => ColumnSpec::Names(parts.into_iter().map(String::from).collect()),
        })
    }
}

/// Parse a boolean option (`headers`).
pub fn parse_flag(option: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(invalid(option, value)),
    }
}

fn invalid(option: &'static str, value: &str) -> Error {
    Error::InvalidOption { option, value: s!(value) }
}

/// Options for [`crate::table::extract`].
#[derive(Clone)]
pub struct TableOptions {
    pub shape: OutputShape,
    pub only: ColumnSpec,
    pub except: Option<ColumnSpec>,
    /// Include the header row in list output. Ignored for maps.
    pub headers: bool,
    pub update: Option<Update>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            shape: OutputShape::Lists,
            only: ColumnSpec::All,
            except: None,
            headers: true,
            update: None,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self { Self::default() }

    pub fn shape(mut self, shape: OutputShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn only(mut self, spec: impl Into<ColumnSpec>) -> Self {
        self.only = spec.into();
        self
    }

    pub fn except(mut self, spec: impl Into<ColumnSpec>) -> Self {
        self.except = Some(spec.into());
        self
    }

    pub fn headers(mut self, on: bool) -> Self {
        self.headers = on;
        self
    }

    pub fn update<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.update = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("shape", &self.shape)
            .field("only", &self.only)
            .field("except", &self.except)
            .field("headers", &self.headers)
            .field("update", &self.update.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
