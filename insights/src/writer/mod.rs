//! Writing the cleaned table.
//!
//! The output lands next to the input as `cleaned_data_<basename>`. Cells are
//! written with the exact text they were read from.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::OUTPUT_PREFIX;
use crate::error::{WriteError, WriteResult};
use crate::models::Table;

/// Output path for a given input: same directory, prefixed base name.
pub fn output_path(input: &Path) -> WriteResult<PathBuf> {
    let file_name = input
        .file_name()
        .ok_or_else(|| WriteError::NoFileName(input.to_path_buf()))?;

    let mut name = OsString::from(OUTPUT_PREFIX);
    name.push(file_name);

    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(name))
}

/// Serialize `table` as comma-separated text with a header row.
pub fn write_table_to<W: Write>(table: &Table, out: W) -> WriteResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.raw.as_str()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or overwrite) `path` with the serialized table.
///
/// The table is written to a temporary file in the same directory and renamed
/// over `path` once flushed, so a failed write never leaves a partial file.
pub fn write_table(table: &Table, path: &Path) -> WriteResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_table_to(table, std::io::BufWriter::new(tmp.as_file_mut()))?;
    tmp.persist(path).map_err(|e| WriteError::IoError(e.error))?;
    Ok(())
}
