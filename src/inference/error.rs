//! Error types for column profiling

use std::path::PathBuf;

use thiserror::Error;

use crate::import::ImportError;

/// Errors that can occur while profiling a tabular file
#[derive(Error, Debug)]
pub enum ProfilerError {
    /// The file has no header row
    #[error("No header row found in '{0}'")]
    MissingHeader(String),

    /// Datatype inference was asked to classify zero values
    #[error("Cannot determine datatype of column '{column}': no values were observed")]
    EmptyValues { column: String },

    /// A data row does not reach a header column
    #[error("Line {line} has {found} field(s) but column '{column}' is at position {position}")]
    MissingField {
        line: u64,
        found: usize,
        column: String,
        position: usize,
    },

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration in '{}': {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// Reading the source failed
    #[error(transparent)]
    Import(#[from] ImportError),
}
