//! Error types for loading tables and running benchmarks

use std::path::PathBuf;

use thiserror::Error;

use crate::sort::Algorithm;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the loader, the column extractor and the harness
#[derive(Debug, Error)]
pub enum Error {
    /// The source contained no lines at all
    #[error("input is empty: no header line found")]
    EmptyInput,

    /// The requested column is not among the headers
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    /// A cell that was expected to be numeric failed to parse
    #[error("column '{column}' line {line}: '{value}' is not a number")]
    NumericParse {
        column: String,
        line: usize,
        value: String,
    },

    /// A short row has no cell for the requested column
    #[error("column '{column}' line {line}: row has no cell for this column")]
    MissingCell { column: String, line: usize },

    /// Strict loading found a row whose width differs from the header
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Path does not carry a `.csv` suffix
    #[error("unsupported file format: {} (expected a .csv file)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A sorter produced output that is not in ascending order
    #[error("{algorithm} produced unsorted output")]
    SortFailed { algorithm: Algorithm },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
