//! Error types for the converter.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a conversion or inspection.
///
/// Row-level timestamp problems are not errors; they are collected as
/// [`RowWarning`](crate::convert::RowWarning)s on the conversion report.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found - {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Required column '{0}' is missing from the CSV header")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("No valid events were found in the CSV file.")]
    EmptyResult,

    #[error("Could not write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format - {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::Csv(err.to_string())
    }
}

/// Result type alias for converter operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
