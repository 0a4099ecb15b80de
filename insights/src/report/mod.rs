//! Descriptive statistics and console rendering.
//!
//! [`TableSummary`] gathers everything the report shows about a table:
//! column types, non-missing counts, head and tail rows and per-column unique
//! counts. [`text`] renders it for humans; the whole [`Report`] also
//! serializes to JSON.

pub mod markdown;
pub mod text;

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::ErrorKind;
use crate::models::{Cell, ColumnType, Table, Value};

/// Per-column statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSummary {
    pub index: usize,
    pub name: String,
    pub dtype: ColumnType,
    pub non_null: usize,
    pub unique: usize,
}

/// Everything printed about a freshly loaded table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub row_count: usize,
    pub columns: Vec<ColumnSummary>,
    pub head: Vec<Vec<Value>>,
    pub tail: Vec<Vec<Value>>,
}

impl TableSummary {
    /// Summarize `table`, previewing `preview_rows` rows at each end.
    pub fn from_table(table: &Table, preview_rows: usize) -> Self {
        let columns = table
            .columns()
            .iter()
            .zip(table.dtypes())
            .enumerate()
            .map(|(index, (name, &dtype))| ColumnSummary {
                index,
                name: name.clone(),
                dtype,
                non_null: non_null_count(table, index),
                unique: unique_count(table, index),
            })
            .collect();

        Self {
            row_count: table.len(),
            columns,
            head: row_values(table.head(preview_rows)),
            tail: row_values(table.tail(preview_rows)),
        }
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// `dtype -> number of columns`, sorted by dtype name.
    pub fn dtype_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for column in &self.columns {
            *counts.entry(column.dtype.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

fn row_values(rows: &[Vec<Cell>]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| row.iter().map(|c| c.value.clone()).collect())
        .collect()
}

/// Number of non-missing cells in a column.
pub fn non_null_count(table: &Table, column: usize) -> usize {
    table.column_values(column).filter(|v| !v.is_missing()).count()
}

/// Number of distinct non-missing values in a column.
pub fn unique_count(table: &Table, column: usize) -> usize {
    table
        .column_values(column)
        .filter(|v| !v.is_missing())
        .map(Value::key)
        .collect::<HashSet<_>>()
        .len()
}

/// Outcome of duplicate removal and the write that follows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningSummary {
    pub rows_before: usize,
    pub rows_after: usize,
    pub duplicates_removed: usize,
    pub output_path: String,
}

/// A failure as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportError {
    pub kind: ErrorKind,
    pub message: String,
}

/// The complete result of one run, as emitted by `--json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TableSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaning: Option<CleaningSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

impl Report {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            encoding: None,
            delimiter: None,
            summary: None,
            cleaning: None,
            error: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
