// src/lib.rs
//! Structured extraction from parsed HTML.
//!
//! - [`selector`]: structured selector descriptions compiled to CSS strings.
//! - [`query`]: `all` / `find` / `find_one` over documents, elements and fragments.
//! - [`form`]: form controls → nested field maps, following browser submission rules.
//! - [`table`]: table rows → rows of cells or header-keyed maps, colspan aware.
//!
//! Parsing and selector matching are done by `scraper`; this crate never does I/O
//! (the optional `cli` front end aside).

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod form;
pub mod query;
pub mod selector;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use config::options::{ColumnSpec, OutputShape, TableOptions};
pub use crate::core::html::{parse_document, parse_fragment, Root};
pub use error::{Error, QueryError, Result};
pub use form::{materialize, materialize_form, FieldMap, FieldValue};
pub use query::{all, find, find_one};
pub use selector::{compile, AttrValue, Sel};
pub use table::{extract, extract_rows, extract_table, Cell, ExtractedTable};
