//! CSV reading with encoding detection and optional delimiter sniffing.
//!
//! Raw bytes are decoded to text, split into records with the `csv` crate and
//! turned into a typed [`Table`].

use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::Encoding;

use crate::config::{DelimiterChoice, CANDIDATE_DELIMITERS};
use crate::error::{CsvError, CsvResult};
use crate::logs::log_warning;
use crate::models::Table;

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub table: Table,
    /// Detected or requested encoding
    pub encoding: String,
    /// Detected or requested delimiter
    pub delimiter: char,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is always reported as UTF-8; anything else is handed to chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    normalize_charset(&chardet::detect(bytes).0)
}

/// Map a chardet charset name onto a label `encoding_rs` understands.
///
/// Unknown labels fall back to windows-1252, which decodes every byte.
pub fn normalize_charset(charset: &str) -> String {
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other if Encoding::for_label(other.as_bytes()).is_some() => other.to_string(),
        other => {
            log_warning(format!(
                "Detected encoding '{}' is not supported, decoding as windows-1252",
                other
            ));
            "windows-1252".to_string()
        }
    }
}

/// Decode bytes to a string using the named encoding.
///
/// A leading byte order mark is removed. Malformed sequences are replaced and
/// reported as a warning rather than failing the run.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let enc = Encoding::for_label(encoding.trim().as_bytes())
        .ok_or_else(|| CsvError::EncodingError(encoding.to_string()))?;

    let (text, used, had_errors) = enc.decode(bytes);
    if had_errors {
        log_warning(format!(
            "Some bytes are not valid {}; they were replaced",
            used.name()
        ));
    }
    Ok(text.into_owned())
}

/// Detect the delimiter by counting candidates on the first line.
///
/// Falls back to a comma when no candidate appears.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &CANDIDATE_DELIMITERS {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Make header names usable as unique column labels.
///
/// Empty names become `Unnamed: <index>`; repeats get `.1`, `.2`, ... suffixes.
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<String> = Vec::with_capacity(raw.len());

    for (i, name) in raw.iter().enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {}", i)
        } else {
            name.clone()
        };

        if used.insert(base.clone()) {
            out.push(base);
            continue;
        }

        let n = suffixes.entry(base.clone()).or_insert(0);
        loop {
            *n += 1;
            let candidate = format!("{}.{}", base, n);
            if used.insert(candidate.clone()) {
                out.push(candidate);
                break;
            }
        }
    }

    out
}

/// Parse decoded CSV text with an explicit delimiter.
pub fn parse_str(content: &str, delimiter: u8) -> CsvResult<Table> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|e| CsvError::parse(1, e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    if raw_headers.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let columns = normalize_headers(&raw_headers);
    let width = columns.len();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            CsvError::parse(line, e.to_string())
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() > width {
            return Err(CsvError::parse(
                line,
                format!("Expected {} fields, saw {}", width, record.len()),
            ));
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::NoRows);
    }

    Ok(Table::from_raw(columns, rows))
}

/// Parse CSV bytes, decoding and choosing a delimiter first.
pub fn parse_bytes(
    bytes: &[u8],
    encoding: Option<&str>,
    delimiter: DelimiterChoice,
) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = match encoding {
        Some(name) => name.to_string(),
        None => detect_encoding(bytes),
    };
    let content = decode_content(bytes, &encoding)?;

    let delimiter = match delimiter {
        DelimiterChoice::Fixed(b) => b as char,
        DelimiterChoice::Auto => detect_delimiter(&content),
    };

    let table = parse_str(&content, delimiter as u8)?;

    Ok(ParseResult {
        table,
        encoding,
        delimiter,
    })
}

/// Read and parse a CSV file.
pub fn parse_csv_file<P: AsRef<Path>>(
    path: P,
    encoding: Option<&str>,
    delimiter: DelimiterChoice,
) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CsvError::NotFound(path.to_path_buf()),
        _ => CsvError::IoError(e),
    })?;

    parse_bytes(&bytes, encoding, delimiter)
}
