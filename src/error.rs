// src/error.rs
//! Error types for queries, form materialization and table extraction.

/// Failures of the query facade.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("expected exactly one node matching {selector:?}, found none")]
    NotFound { selector: String },

    #[error("expected exactly one node matching {selector:?}, found {count}:\n{rendered}")]
    Ambiguous {
        selector: String,
        count: usize,
        rendered: String,
    },

    #[error("cannot search for {selector:?}: no tree given")]
    MissingTree { selector: String },

    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A field path is used both as a value and as a namespace for nested fields.
    #[error("field {incoming:?} conflicts with field {existing:?}")]
    MergeConflict { existing: String, incoming: String },

    #[error("unknown column {name:?}; known columns: {known:?}")]
    UnknownColumn { name: String, known: Vec<String> },

    #[error("invalid value {value:?} for option `{option}`")]
    InvalidOption { option: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
