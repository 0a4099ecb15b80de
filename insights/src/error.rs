//! Error types for the insights pipeline.
//!
//! - [`CsvError`] - reading, decoding and parsing the input file
//! - [`WriteError`] - writing the cleaned file
//! - [`InsightsError`] - top-level errors returned by the pipeline
//!
//! Every failure is eventually reduced to one of the three user-facing
//! [`ErrorKind`]s and printed as a single message; none of them abort the
//! process.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading and parsing the input file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Unknown or unsupported encoding name.
    #[error("Unsupported encoding: {0}")]
    EncodingError(String),

    /// Invalid CSV format.
    #[error("Invalid CSV format at line {line}: {message}")]
    ParseError { line: u64, message: String },

    /// Zero bytes, or only whitespace.
    #[error("No columns to parse from file")]
    EmptyFile,

    /// A header row but no data rows.
    #[error("No data rows found after the header")]
    NoRows,
}

impl CsvError {
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        CsvError::ParseError {
            line,
            message: message.into(),
        }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the cleaned file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The input path has no file name to derive the output name from.
    #[error("Cannot derive an output file name from '{}'", .0.display())]
    NoFileName(PathBuf),

    /// IO error.
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),
}

// =============================================================================
// Top-level Errors
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::analyze_and_clean`].
#[derive(Debug, Error)]
pub enum InsightsError {
    /// Reading or parsing the input failed.
    #[error("{0}")]
    Csv(#[from] CsvError),

    /// Writing the cleaned file failed.
    #[error("{0}")]
    Write(#[from] WriteError),

    /// Writing the report to the console failed.
    #[error("Failed to print report: {0}")]
    Console(#[from] std::io::Error),

    /// Serializing the JSON report failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// The three outcomes a user can see when a run fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingFile,
    EmptyData,
    Unexpected,
}

impl InsightsError {
    /// Classify this error into a user-facing kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InsightsError::Csv(CsvError::NotFound(_)) => ErrorKind::MissingFile,
            InsightsError::Csv(CsvError::EmptyFile | CsvError::NoRows) => ErrorKind::EmptyData,
            _ => ErrorKind::Unexpected,
        }
    }

    /// The message printed for this error when processing `path`.
    pub fn user_message(&self, path: &str) -> String {
        match self.kind() {
            ErrorKind::MissingFile => format!("Error: The file '{}' was not found.", path),
            ErrorKind::EmptyData => format!("Error: The file '{}' is empty.", path),
            ErrorKind::Unexpected => format!("An unexpected error occurred: {}", self),
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for output writing.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for the pipeline.
pub type InsightsResult<T> = Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        let err: InsightsError = CsvError::NotFound(PathBuf::from("x.csv")).into();
        assert_eq!(err.kind(), ErrorKind::MissingFile);

        let err: InsightsError = CsvError::EmptyFile.into();
        assert_eq!(err.kind(), ErrorKind::EmptyData);

        let err: InsightsError = CsvError::NoRows.into();
        assert_eq!(err.kind(), ErrorKind::EmptyData);

        let err: InsightsError = CsvError::parse(3, "Expected 2 fields, saw 3").into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_user_messages() {
        let err: InsightsError = CsvError::NotFound(PathBuf::from("data.csv")).into();
        assert_eq!(
            err.user_message("data.csv"),
            "Error: The file 'data.csv' was not found."
        );

        let err: InsightsError = CsvError::EmptyFile.into();
        assert_eq!(err.user_message("data.csv"), "Error: The file 'data.csv' is empty.");

        let err: InsightsError = CsvError::parse(4, "Expected 2 fields, saw 3").into();
        let msg = err.user_message("data.csv");
        assert!(msg.starts_with("An unexpected error occurred: "));
        assert!(msg.contains("line 4"));
        assert!(msg.contains("Expected 2 fields, saw 3"));
    }
}
