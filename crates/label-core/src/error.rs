//! Error types for label transformation.

use std::path::PathBuf;
use thiserror::Error;

/// A label token outside the fixed true/false vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected label value: {value:?}")]
pub struct InvalidLabelToken {
    /// The raw value as it appeared in the input, before trimming.
    pub value: String,
}

impl InvalidLabelToken {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Errors that can occur while streaming a file through the transformer.
///
/// Every variant is fatal to the current call. Row numbers are 1-based and
/// count data rows after the header.
#[derive(Debug, Error)]
pub enum TransformError {
    // === File System Errors ===
    /// Input file could not be opened.
    #[error("open input {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or truncated.
    #[error("create output {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Flushing buffered output failed.
    #[error("flush output: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },

    // === Header Errors ===
    /// Input has no readable first row.
    #[error("read header: {}", describe_header_failure(.source.as_ref()))]
    MissingHeader {
        #[source]
        source: Option<csv::Error>,
    },

    /// No header field matches the required column name.
    #[error("no column named '{column}' found")]
    MissingColumn { column: String },

    /// Header row could not be written to the output.
    #[error("write header: {source}")]
    WriteHeader {
        #[source]
        source: csv::Error,
    },

    // === Row Errors ===
    /// Row is malformed (bad quoting, wrong field count, invalid UTF-8) or
    /// the underlying read failed.
    #[error("read row {row}: {source}")]
    RowRead {
        row: u64,
        #[source]
        source: csv::Error,
    },

    /// Label value on this row is not in the vocabulary.
    #[error("row {row}: {source}")]
    RowTransform {
        row: u64,
        #[source]
        source: InvalidLabelToken,
    },

    /// Duration value on this row is not a number.
    #[error("row {row}: invalid true_duration_seconds value {value:?}")]
    InvalidDuration { row: u64, value: String },

    /// Row could not be written to the output.
    #[error("write row {row}: {source}")]
    WriteRow {
        row: u64,
        #[source]
        source: csv::Error,
    },
}

impl TransformError {
    /// Returns the 1-based data row the error is attached to, if any.
    pub fn row(&self) -> Option<u64> {
        match self {
            Self::RowRead { row, .. }
            | Self::RowTransform { row, .. }
            | Self::InvalidDuration { row, .. }
            | Self::WriteRow { row, .. } => Some(*row),
            _ => None,
        }
    }
}

fn describe_header_failure(source: Option<&csv::Error>) -> String {
    match source {
        Some(err) => err.to_string(),
        None => "input is empty".to_string(),
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
