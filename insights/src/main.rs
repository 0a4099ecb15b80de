//! csv-insights CLI - print quick insights about a CSV file and save a copy
//! without duplicate rows.
//!
//! ```bash
//! csv-insights data.csv                  # report + data/cleaned_data_data.csv
//! csv-insights data.csv --json           # same, report as JSON
//! csv-insights data.csv --delimiter auto # sniff ; , tab or |
//! csv-insights                           # prompt for the path
//! ```

use clap::Parser;
use csv_insights::config::DEFAULT_PREVIEW_ROWS;
use csv_insights::logs::LOGGER;
use csv_insights::{run, DelimiterChoice, InsightsOptions, ReportFormat};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "csv-insights")]
#[command(about = "Show quick insights about a CSV file and save a copy without duplicate rows", long_about = None)]
struct Cli {
    /// Input CSV file (prompted for when omitted)
    path: Option<String>,

    /// Field delimiter: a single character, 'tab', or 'auto'
    #[arg(short, long, default_value = ",")]
    delimiter: DelimiterChoice,

    /// Input encoding (auto-detect if not specified)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Number of rows shown at the top and bottom
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    rows: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Hide progress messages on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    LOGGER.set_quiet(cli.quiet);

    let source = match cli.path {
        Some(path) => path,
        None => prompt_for_path(),
    };

    let options = InsightsOptions {
        delimiter: cli.delimiter,
        encoding: cli.encoding,
        preview_rows: cli.rows,
        format: if cli.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&source, &options, &mut out);
}

/// Ask for the input path on stdin.
///
/// An unreadable or closed stdin yields an empty path, which is then reported
/// as a missing file.
fn prompt_for_path() -> String {
    println!("Welcome to the CSV Quick Insights Tool!");
    print!("Please enter the full path to your CSV file: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    clean_path_input(&line)
}

/// Trim whitespace and one pair of surrounding quotes from a typed path.
fn clean_path_input(line: &str) -> String {
    let trimmed = line.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_input() {
        assert_eq!(clean_path_input("data.csv\n"), "data.csv");
        assert_eq!(clean_path_input("  /tmp/a b.csv \r\n"), "/tmp/a b.csv");
        assert_eq!(clean_path_input("'/tmp/a b.csv'\n"), "/tmp/a b.csv");
        assert_eq!(clean_path_input("\"x.csv\""), "x.csv");
        assert_eq!(clean_path_input("\""), "\"");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["csv-insights", "data.csv"]);
        assert_eq!(cli.path.as_deref(), Some("data.csv"));
        assert_eq!(cli.delimiter, DelimiterChoice::Fixed(b','));
        assert_eq!(cli.rows, 5);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::parse_from([
            "csv-insights",
            "--delimiter",
            "auto",
            "--encoding",
            "windows-1252",
            "--rows",
            "3",
            "--json",
        ]);
        assert!(cli.path.is_none());
        assert_eq!(cli.delimiter, DelimiterChoice::Auto);
        assert_eq!(cli.encoding.as_deref(), Some("windows-1252"));
        assert_eq!(cli.rows, 3);
        assert!(cli.json);
    }
}
