//! CSV file utilities
//!
//! Reading returns every record with its line number so callers can report
//! exactly which row is bad. Writing replaces the whole file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// A deserialized record and the 1-based line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct CsvLine<T> {
    pub line: u64,
    pub record: T,
}

/// Read CSV records from a file, returning no records if the file doesn't exist
pub fn read_csv<T, P>(path: P) -> Result<Vec<CsvLine<T>>, BudgetError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader.headers()?.clone();
    let mut lines = Vec::new();

    for result in reader.records() {
        let record: StringRecord = result.map_err(|e| {
            BudgetError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let parsed: T = record.deserialize(Some(&headers)).map_err(|e| {
            BudgetError::Storage(format!("{} line {}: {}", path.display(), line, e))
        })?;
        lines.push(CsvLine {
            line,
            record: parsed,
        });
    }

    Ok(lines)
}

/// Write a header and all records, replacing the file's previous contents
///
/// The data goes to a sibling temp file first, which is then renamed over
/// the target.
pub fn write_csv<T, P>(path: P, header: &[&str], records: &[T]) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(header)?;
    for record in records {
        writer.serialize(record)?;
    }

    let mut inner = writer
        .into_inner()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;
    inner
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;
    drop(inner);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
