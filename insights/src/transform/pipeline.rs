//! The analyze-and-clean run.
//!
//! One straight pass over a single file:
//! 1. Read and parse the CSV (encoding and delimiter handling in [`crate::parser`])
//! 2. Print structure, head, tail and unique counts
//! 3. Drop full-row duplicates, keeping first occurrences
//! 4. Write the result next to the input as `cleaned_data_<name>`
//!
//! # Example
//!
//! ```rust,ignore
//! use csv_insights::{run, InsightsOptions};
//!
//! let mut stdout = std::io::stdout();
//! let report = run("sales.csv", &InsightsOptions::default(), &mut stdout);
//! assert!(report.error.is_none());
//! ```

use std::io::Write;
use std::path::Path;

use crate::config::{format_delimiter, InsightsOptions, ReportFormat};
use crate::error::InsightsResult;
use crate::logs::{log_error, log_info, log_info_indent, log_success};
use crate::parser::parse_csv_file;
use crate::report::{text, CleaningSummary, Report, ReportError, TableSummary};
use crate::transform::dedup::drop_duplicates;
use crate::writer::{output_path, write_table};

/// Run the whole pipeline on `source`, printing the report to `out`.
///
/// Never fails: errors are turned into a message on `out` (or the `error`
/// field of the JSON report) and recorded in the returned [`Report`].
pub fn run<W: Write>(source: &str, options: &InsightsOptions, out: &mut W) -> Report {
    let mut report = Report::new(source);

    if let Err(err) = analyze_and_clean(source, options, out, &mut report) {
        let message = err.user_message(source);
        match options.format {
            // Nothing left to report to if the console itself is gone.
            ReportFormat::Text => {
                let _ = writeln!(out, "{}", message);
            }
            ReportFormat::Json => log_error(&message),
        }
        report.error = Some(ReportError {
            kind: err.kind(),
            message,
        });
    }

    if options.format == ReportFormat::Json {
        match report.to_json() {
            Ok(json) => {
                let _ = writeln!(out, "{}", json);
            }
            Err(e) => {
                let _ = writeln!(out, "An unexpected error occurred: {}", e);
            }
        }
    }

    report
}

/// Read, describe, deduplicate and write, filling `report` as it goes.
///
/// Text output is written section by section; nothing is written to disk
/// unless every earlier step succeeded.
pub fn analyze_and_clean<W: Write>(
    source: &str,
    options: &InsightsOptions,
    out: &mut W,
    report: &mut Report,
) -> InsightsResult<()> {
    let input = Path::new(source);
    let text_mode = options.format == ReportFormat::Text;

    // Step 1: read
    log_info(format!("📖 Reading {}", input.display()));
    let parsed = parse_csv_file(input, options.encoding.as_deref(), options.delimiter)?;
    let mut table = parsed.table;

    log_success(format!("Detected encoding: {}", parsed.encoding));
    log_success(format!(
        "Using separator: '{}'",
        format_delimiter(parsed.delimiter)
    ));
    log_success(format!(
        "Read {} rows x {} columns",
        table.len(),
        table.column_count()
    ));
    report.encoding = Some(parsed.encoding);
    report.delimiter = Some(format_delimiter(parsed.delimiter));

    // Step 2: describe
    let summary = TableSummary::from_table(&table, options.preview_rows);
    if text_mode {
        text::write_insights(out, source, &summary, options.preview_rows)?;
    }
    report.summary = Some(summary);

    // Step 3: deduplicate
    let outcome = drop_duplicates(&mut table);
    log_info("Checking for duplicate rows...");
    log_info_indent(format!("{} duplicate row(s)", outcome.removed()), 1);

    let output = output_path(input)?;
    let cleaning = CleaningSummary {
        rows_before: outcome.rows_before,
        rows_after: outcome.rows_after,
        duplicates_removed: outcome.removed(),
        output_path: output.display().to_string(),
    };
    if text_mode {
        text::write_cleaning(out, &cleaning)?;
    }

    // Step 4: write
    write_table(&table, &output)?;
    log_success(format!(
        "Wrote {} rows to {}",
        outcome.rows_after,
        output.display()
    ));
    if text_mode {
        text::write_saved(out, &cleaning)?;
    }
    report.cleaning = Some(cleaning);

    Ok(())
}
