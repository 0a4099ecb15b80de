//! Plain-text console report.
//!
//! Sections are written in the order they are produced so a failure late in
//! the run still leaves the earlier insights on screen.

use std::io::{self, Write};

use super::markdown::{pipe_table, Align};
use super::{CleaningSummary, TableSummary};
use crate::models::Value;

/// Print the insights for a freshly loaded table: structure, head, tail and
/// unique counts.
pub fn write_insights<W: Write>(
    out: &mut W,
    source: &str,
    summary: &TableSummary,
    preview_rows: usize,
) -> io::Result<()> {
    writeln!(out, "\n--- Insights for '{}' ---", source)?;

    writeln!(out, "\n--- File Structure (Columns, Data Types, Non-Null Counts) ---")?;
    writeln!(out, "{}", structure(summary))?;

    writeln!(out, "\n--- Top {} Rows ---", preview_rows)?;
    writeln!(out, "{}", rows_table(summary, &summary.head))?;

    writeln!(out, "\n--- Bottom {} Rows ---", preview_rows)?;
    writeln!(out, "{}", rows_table(summary, &summary.tail))?;

    writeln!(out, "\n--- Unique Values Per Column ---")?;
    writeln!(out, "{}", unique_table(summary))?;

    Ok(())
}

/// Print the duplicate-removal outcome.
pub fn write_cleaning<W: Write>(out: &mut W, cleaning: &CleaningSummary) -> io::Result<()> {
    writeln!(out, "\n--- Data Cleaning ---")?;
    writeln!(out, "{}", removal_message(cleaning.duplicates_removed))
}

/// Print where the cleaned file went and close the report.
pub fn write_saved<W: Write>(out: &mut W, cleaning: &CleaningSummary) -> io::Result<()> {
    writeln!(out, "Cleaned data saved to: '{}'", cleaning.output_path)?;
    writeln!(out, "\n--- Analysis Complete ---")
}

/// The one-line duplicate report.
pub fn removal_message(removed: usize) -> String {
    if removed > 0 {
        format!("Removed {} duplicate row(s).", removed)
    } else {
        "No duplicate rows found or removed.".to_string()
    }
}

/// Column listing with types and non-missing counts.
pub fn structure(summary: &TableSummary) -> String {
    let name_width = summary
        .columns
        .iter()
        .map(|c| c.name.chars().count())
        .chain(std::iter::once("Column".len()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(summary.columns.len() + 5);

    let rows = summary.row_count;
    lines.push(format!(
        "RangeIndex: {} entries, 0 to {}",
        rows,
        rows.saturating_sub(1)
    ));
    lines.push(format!(
        "Data columns (total {} columns):",
        summary.columns.len()
    ));
    lines.push(format!(
        " {:<3} {:<w$}  {:<14}  {}",
        "#",
        "Column",
        "Non-Null Count",
        "Dtype",
        w = name_width
    ));
    lines.push(format!(
        "{:<4} {:<w$}  {:<14}  {}",
        "---",
        "------",
        "--------------",
        "-----",
        w = name_width
    ));

    for column in &summary.columns {
        lines.push(format!(
            " {:<3} {:<w$}  {:<14}  {}",
            column.index,
            column.name,
            format!("{} non-null", column.non_null),
            column.dtype,
            w = name_width
        ));
    }

    let dtypes: Vec<String> = summary
        .dtype_counts()
        .into_iter()
        .map(|(dtype, count)| format!("{}({})", dtype, count))
        .collect();
    lines.push(format!("dtypes: {}", dtypes.join(", ")));

    lines.join("\n")
}

fn rows_table(summary: &TableSummary, rows: &[Vec<Value>]) -> String {
    let aligns: Vec<Align> = summary
        .columns
        .iter()
        .map(|c| {
            if c.dtype.is_numeric() {
                Align::Right
            } else {
                Align::Left
            }
        })
        .collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();

    pipe_table(&summary.column_names(), &aligns, &cells)
}

fn unique_table(summary: &TableSummary) -> String {
    let headers = vec!["Column".to_string(), "Unique Values".to_string()];
    let rows: Vec<Vec<String>> = summary
        .columns
        .iter()
        .map(|c| vec![c.name.clone(), c.unique.to_string()])
        .collect();

    pipe_table(&headers, &[Align::Left, Align::Right], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn summary_of(csv: &str) -> TableSummary {
        TableSummary::from_table(&parse_str(csv, b',').unwrap(), 5)
    }

    #[test]
    fn test_structure_layout() {
        let summary = summary_of("a,b\n1,2\n1,2\n3,4\n");

        let expected = [
            "RangeIndex: 3 entries, 0 to 2",
            "Data columns (total 2 columns):",
            " #   Column  Non-Null Count  Dtype",
            "---  ------  --------------  -----",
            " 0   a       3 non-null      int64",
            " 1   b       3 non-null      int64",
            "dtypes: int64(2)",
        ]
        .join("\n");

        assert_eq!(structure(&summary), expected);
    }

    #[test]
    fn test_structure_wide_names() {
        let summary = summary_of("customer_name,x\nA,\n");
        let text = structure(&summary);

        assert!(text.contains(" 0   customer_name  1 non-null      object"));
        assert!(text.contains(" 1   x              0 non-null      float64"));
        assert!(text.contains("dtypes: float64(1), object(1)"));
    }

    #[test]
    fn test_removal_message() {
        assert_eq!(removal_message(1), "Removed 1 duplicate row(s).");
        assert_eq!(removal_message(0), "No duplicate rows found or removed.");
    }

    #[test]
    fn test_insights_section_order() {
        let summary = summary_of("a,b\n1,x\n2,\n");
        let mut out = Vec::new();
        write_insights(&mut out, "data.csv", &summary, 5).unwrap();
        let text = String::from_utf8(out).unwrap();

        let order = [
            "--- Insights for 'data.csv' ---",
            "--- File Structure (Columns, Data Types, Non-Null Counts) ---",
            "--- Top 5 Rows ---",
            "--- Bottom 5 Rows ---",
            "--- Unique Values Per Column ---",
        ];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // Missing text renders as nan, numbers right-aligned
        assert!(text.contains("| nan |"));
        assert!(text.contains("|--:|:----|"));
        assert!(text.contains("| a      |             2 |"));
    }
}
