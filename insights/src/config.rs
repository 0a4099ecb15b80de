//! Run options.
//!
//! Built from the command line in `main.rs` and passed down to the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix added to the input base name to form the output file name.
pub const OUTPUT_PREFIX: &str = "cleaned_data_";

/// Number of rows shown in the head and tail previews.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Separators tried when sniffing the delimiter.
pub const CANDIDATE_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

/// How the field delimiter is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterChoice {
    /// Use this exact byte.
    Fixed(u8),
    /// Pick the most frequent candidate on the header line.
    Auto,
}

impl Default for DelimiterChoice {
    fn default() -> Self {
        DelimiterChoice::Fixed(b',')
    }
}

impl FromStr for DelimiterChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(DelimiterChoice::Auto),
            "\\t" | "tab" => Ok(DelimiterChoice::Fixed(b'\t')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => {
                        Ok(DelimiterChoice::Fixed(c as u8))
                    }
                    _ => Err(format!(
                        "invalid delimiter '{}': expected a single ASCII character, 'tab' or 'auto'",
                        s
                    )),
                }
            }
        }
    }
}

impl fmt::Display for DelimiterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterChoice::Auto => f.write_str("auto"),
            DelimiterChoice::Fixed(b) => f.write_str(&format_delimiter(*b as char)),
        }
    }
}

/// Printable form of a delimiter (`\t` for tab).
pub fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Options for one analyze-and-clean run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsOptions {
    /// Field delimiter
    pub delimiter: DelimiterChoice,

    /// Input encoding; detected from the bytes when `None`
    pub encoding: Option<String>,

    /// Rows shown in the head and tail previews
    pub preview_rows: usize,

    /// Report format
    pub format: ReportFormat,
}

impl Default for InsightsOptions {
    fn default() -> Self {
        Self {
            delimiter: DelimiterChoice::default(),
            encoding: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            format: ReportFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter_choice() {
        assert_eq!("auto".parse::<DelimiterChoice>(), Ok(DelimiterChoice::Auto));
        assert_eq!(";".parse::<DelimiterChoice>(), Ok(DelimiterChoice::Fixed(b';')));
        assert_eq!("tab".parse::<DelimiterChoice>(), Ok(DelimiterChoice::Fixed(b'\t')));
        assert_eq!("\\t".parse::<DelimiterChoice>(), Ok(DelimiterChoice::Fixed(b'\t')));
    }

    #[test]
    fn test_reject_bad_delimiters() {
        assert!(";;".parse::<DelimiterChoice>().is_err());
        assert!("é".parse::<DelimiterChoice>().is_err());
        assert!("\"".parse::<DelimiterChoice>().is_err());
        assert!("".parse::<DelimiterChoice>().is_err());
    }

    #[test]
    fn test_defaults() {
        let options = InsightsOptions::default();
        assert_eq!(options.delimiter, DelimiterChoice::Fixed(b','));
        assert_eq!(options.preview_rows, 5);
        assert_eq!(options.format, ReportFormat::Text);
        assert!(options.encoding.is_none());
    }

    #[test]
    fn test_delimiter_display() {
        assert_eq!(DelimiterChoice::Fixed(b'\t').to_string(), "\\t");
        assert_eq!(DelimiterChoice::Auto.to_string(), "auto");
    }
}
