//! # csv-insights - quick look at a CSV file, minus its duplicate rows
//!
//! Loads a delimited text file, prints its structure, first and last rows and
//! per-column unique counts, then writes a copy without duplicate rows next to
//! the original.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Report    │────▶│ Drop duplicates  │──▶ cleaned_data_<name>
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (info/head) │     │ (first one wins) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and user-facing error kinds
//! - [`config`] - Run options
//! - [`logs`] - Diagnostic log lines
//! - [`models`] - Values, column types and the table
//! - [`parser`] - CSV parsing with encoding detection
//! - [`report`] - Statistics and rendering
//! - [`transform`] - Duplicate removal and the pipeline
//! - [`writer`] - Output path and CSV serialization

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Reading and writing
pub mod parser;
pub mod writer;

// Analysis
pub mod report;
pub mod transform;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{DelimiterChoice, InsightsOptions, ReportFormat};
pub use error::{CsvError, ErrorKind, InsightsError, WriteError};
pub use models::{Cell, ColumnType, Table, Value};
pub use parser::{parse_bytes, parse_csv_file, parse_str, ParseResult};
pub use report::{CleaningSummary, ColumnSummary, Report, TableSummary};
pub use transform::pipeline::{analyze_and_clean, run};
pub use transform::{drop_duplicates, DedupOutcome};
pub use writer::{output_path, write_table};
