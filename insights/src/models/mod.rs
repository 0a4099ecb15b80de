//! Domain models for the insights pipeline.
//!
//! - [`Value`] - a typed scalar cell value
//! - [`Cell`] - a value together with the raw text it was read from
//! - [`ColumnType`] - the inferred type of a column
//! - [`Table`] - header plus rows, every row as wide as the header

use serde::Serialize;
use std::fmt;

// =============================================================================
// Missing values
// =============================================================================

/// Raw cell contents treated as missing.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell is one of the [`NA_TOKENS`].
///
/// Matching is exact: `" NA"` is text, not a missing value.
pub fn is_na(raw: &str) -> bool {
    NA_TOKENS.contains(&raw)
}

// =============================================================================
// Values
// =============================================================================

/// A single cell value after type coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Equality key used for duplicate detection and unique counts.
    pub fn key(&self) -> ValueKey<'_> {
        match self {
            Value::Text(s) => ValueKey::Text(s),
            Value::Integer(i) => ValueKey::Integer(*i),
            Value::Float(f) => ValueKey::Float(float_bits(*f)),
            Value::Missing => ValueKey::Missing,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => write!(f, "nan"),
            Value::Float(x) => write!(f, "{}", x),
            Value::Missing => write!(f, "nan"),
        }
    }
}

/// Hashable view of a [`Value`].
///
/// Floats are compared by bit pattern after folding `-0.0` into `0.0` and
/// every NaN into a single canonical NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKey<'a> {
    Text(&'a str),
    Integer(i64),
    Float(u64),
    Missing,
}

fn float_bits(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}

/// A parsed cell. `raw` is written back verbatim on output.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub raw: String,
    pub value: Value,
}

// =============================================================================
// Column types
// =============================================================================

/// Inferred column type, named like the usual dataframe dtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int64,
    Float64,
    Object,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Object => "object",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnType::Object)
    }

    /// Infer the type of a column from its raw cells.
    ///
    /// Integers with at least one missing cell widen to `float64`, and a
    /// column with no values at all is `float64`.
    pub fn infer<'a, I>(raw_cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut any_missing = false;
        let mut all_int = true;

        for raw in raw_cells {
            if is_na(raw) {
                any_missing = true;
                continue;
            }
            let trimmed = raw.trim();
            if all_int && trimmed.parse::<i64>().is_ok() {
                continue;
            }
            all_int = false;
            if trimmed.parse::<f64>().is_err() {
                return ColumnType::Object;
            }
        }

        if all_int && !any_missing {
            ColumnType::Int64
        } else {
            ColumnType::Float64
        }
    }

    /// Coerce a raw cell to this column type.
    pub fn coerce(&self, raw: &str) -> Value {
        if is_na(raw) {
            return Value::Missing;
        }
        let trimmed = raw.trim();
        match self {
            ColumnType::Int64 => trimmed
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or_else(|_| Value::Text(raw.to_string())),
            ColumnType::Float64 => match trimmed.parse::<f64>() {
                Ok(x) if x.is_nan() => Value::Missing,
                Ok(x) => Value::Float(x),
                Err(_) => Value::Text(raw.to_string()),
            },
            ColumnType::Object => Value::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Table
// =============================================================================

/// An in-memory table: named columns and rows of typed cells.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    dtypes: Vec<ColumnType>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from raw text, inferring and applying column types.
    ///
    /// Every row must have exactly `columns.len()` cells.
    pub fn from_raw(columns: Vec<String>, raw_rows: Vec<Vec<String>>) -> Self {
        let dtypes: Vec<ColumnType> = (0..columns.len())
            .map(|i| ColumnType::infer(raw_rows.iter().map(|r| r[i].as_str())))
            .collect();

        let rows = raw_rows
            .into_iter()
            .map(|raw_row| {
                raw_row
                    .into_iter()
                    .zip(&dtypes)
                    .map(|(raw, dtype)| Cell {
                        value: dtype.coerce(&raw),
                        raw,
                    })
                    .collect()
            })
            .collect();

        Self { columns, dtypes, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn dtypes(&self) -> &[ColumnType] {
        &self.dtypes
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Last `n` rows.
    pub fn tail(&self, n: usize) -> &[Vec<Cell>] {
        &self.rows[self.rows.len().saturating_sub(n)..]
    }

    /// Cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index].value)
    }

    /// Keep only the rows for which `keep` returns true, preserving order.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Cell]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_int() {
        assert_eq!(ColumnType::infer(["1", "2", "-3"]), ColumnType::Int64);
    }

    #[test]
    fn test_infer_int_with_missing_widens_to_float() {
        assert_eq!(ColumnType::infer(["1", "", "3"]), ColumnType::Float64);
        assert_eq!(ColumnType::infer(["1", "NA"]), ColumnType::Float64);
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(ColumnType::infer(["1", "2.5", "1e3"]), ColumnType::Float64);
    }

    #[test]
    fn test_infer_all_missing_is_float() {
        assert_eq!(ColumnType::infer(["", "null"]), ColumnType::Float64);
    }

    #[test]
    fn test_infer_object() {
        assert_eq!(ColumnType::infer(["1", "abc", "2"]), ColumnType::Object);
    }

    #[test]
    fn test_na_tokens_match_exactly() {
        assert!(is_na("NA"));
        assert!(is_na(""));
        assert!(!is_na(" NA"));
        assert!(!is_na("na "));
        assert_eq!(ColumnType::infer(["1", " NA"]), ColumnType::Object);
    }

    #[test]
    fn test_coerce_per_type() {
        assert_eq!(ColumnType::Int64.coerce("42"), Value::Integer(42));
        assert_eq!(ColumnType::Float64.coerce("1"), Value::Float(1.0));
        assert_eq!(ColumnType::Object.coerce("01"), Value::Text("01".into()));
        assert_eq!(ColumnType::Object.coerce("N/A"), Value::Missing);
        assert_eq!(ColumnType::Float64.coerce("NAN"), Value::Missing);
    }

    #[test]
    fn test_float_keys_fold_signed_zero() {
        assert_eq!(Value::Float(0.0).key(), Value::Float(-0.0).key());
        assert_eq!(Value::Float(f64::NAN).key(), Value::Float(-f64::NAN).key());
        assert_ne!(Value::Float(1.0).key(), Value::Float(1.5).key());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Missing.to_string(), "nan");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Integer(7).to_string(), "7");
    }

    #[test]
    fn test_table_head_tail() {
        let rows = (0..8).map(|i| vec![i.to_string()]).collect();
        let table = Table::from_raw(strings(&["n"]), rows);

        assert_eq!(table.len(), 8);
        assert_eq!(table.head(5).len(), 5);
        assert_eq!(table.head(5)[0][0].value, Value::Integer(0));
        assert_eq!(table.tail(5)[0][0].value, Value::Integer(3));
        assert_eq!(table.tail(20).len(), 8);
    }

    #[test]
    fn test_table_keeps_raw_text() {
        let table = Table::from_raw(strings(&["x"]), vec![strings(&["1.50"]), strings(&[""])]);
        assert_eq!(table.dtypes(), &[ColumnType::Float64]);
        assert_eq!(table.rows()[0][0].raw, "1.50");
        assert_eq!(table.rows()[0][0].value, Value::Float(1.5));
        assert!(table.rows()[1][0].value.is_missing());
    }
}
