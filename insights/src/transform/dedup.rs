//! Full-row duplicate removal.
//!
//! A row is a duplicate when every cell equals the cell in the same column of
//! an earlier row (see [`Value::key`](crate::models::Value::key) for how values
//! compare). The first occurrence is kept and row order is otherwise
//! untouched.

use std::collections::HashSet;

use crate::models::{Cell, Table, ValueKey};

/// Row counts before and after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupOutcome {
    pub rows_before: usize,
    pub rows_after: usize,
}

impl DedupOutcome {
    pub fn removed(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

fn row_key(row: &[Cell]) -> Vec<ValueKey<'_>> {
    row.iter().map(|cell| cell.value.key()).collect()
}

/// For each row, whether it repeats an earlier row.
pub fn duplicated(table: &Table) -> Vec<bool> {
    let mut seen: HashSet<Vec<ValueKey<'_>>> = HashSet::with_capacity(table.len());
    table
        .rows()
        .iter()
        .map(|row| !seen.insert(row_key(row)))
        .collect()
}

/// Remove every row that repeats an earlier row, keeping first occurrences.
pub fn drop_duplicates(table: &mut Table) -> DedupOutcome {
    let rows_before = table.len();
    let mut flags = duplicated(table).into_iter();
    table.retain_rows(|_| !flags.next().unwrap_or(false));

    DedupOutcome {
        rows_before,
        rows_after: table.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn raw_rows(table: &Table) -> Vec<Vec<String>> {
        table
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.raw.clone()).collect())
            .collect()
    }

    #[test]
    fn test_removes_exact_duplicates() {
        let mut table = parse_str("a,b\n1,2\n1,2\n3,4\n", b',').unwrap();
        let outcome = drop_duplicates(&mut table);

        assert_eq!(outcome.removed(), 1);
        assert_eq!(outcome.rows_after, 2);
        assert_eq!(raw_rows(&table), vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_keeps_first_occurrence_order() {
        let mut table = parse_str("k\nb\na\nb\nc\na\n", b',').unwrap();
        drop_duplicates(&mut table);

        assert_eq!(raw_rows(&table), vec![vec!["b"], vec!["a"], vec!["c"]]);
    }

    #[test]
    fn test_no_duplicates() {
        let mut table = parse_str("a,b\n1,2\n2,1\n", b',').unwrap();
        let outcome = drop_duplicates(&mut table);

        assert_eq!(outcome.removed(), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_partial_match_is_not_duplicate() {
        let mut table = parse_str("a,b\n1,2\n1,3\n", b',').unwrap();
        assert_eq!(drop_duplicates(&mut table).removed(), 0);
    }

    #[test]
    fn test_missing_values_compare_equal() {
        let mut table = parse_str("a,b\n1,\n1,NA\n", b',').unwrap();
        let outcome = drop_duplicates(&mut table);

        assert_eq!(outcome.removed(), 1);
        // first spelling wins
        assert_eq!(table.rows()[0][1].raw, "");
    }

    #[test]
    fn test_numeric_spellings_in_float_column() {
        let mut table = parse_str("x\n1\n1.0\n-0.0\n0\n2.5\n", b',').unwrap();
        let outcome = drop_duplicates(&mut table);

        assert_eq!(outcome.removed(), 2);
        assert_eq!(raw_rows(&table), vec![vec!["1"], vec!["-0.0"], vec!["2.5"]]);
    }

    #[test]
    fn test_text_column_compares_raw_text() {
        let mut table = parse_str("code,name\n01,a\n1,a\nx,a\n", b',').unwrap();
        assert_eq!(drop_duplicates(&mut table).removed(), 0);
    }

    #[test]
    fn test_duplicated_mask() {
        let table = parse_str("a\n1\n2\n1\n1\n", b',').unwrap();
        assert_eq!(duplicated(&table), vec![false, false, true, true]);
    }
}
