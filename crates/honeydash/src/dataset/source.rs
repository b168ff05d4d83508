//! Raw tabular data and metadata about the file it came from.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HoneyError, Result};

/// Metadata about a loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was read.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been read.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }

    /// Metadata for data built in memory rather than read from disk.
    pub fn in_memory(row_count: usize, column_count: usize) -> Self {
        Self::new(
            PathBuf::from("<memory>"),
            String::new(),
            0,
            "memory".to_string(),
            row_count,
            column_count,
        )
    }
}

/// Parsed tabular data, all cells kept as strings.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name. Header whitespace is ignored.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Position of a column that must be present.
    pub fn require_column(&self, dataset: &'static str, name: &'static str) -> Result<usize> {
        self.column_index(name).ok_or(HoneyError::MissingColumn {
            dataset,
            column: name,
        })
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check if a value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }
}

/// Typed cell access for one row of a [`DataTable`].
///
/// Row numbers in errors are 1-based data rows (the header is not counted).
pub(crate) struct RowReader<'a> {
    table: &'a DataTable,
    row: usize,
}

impl<'a> RowReader<'a> {
    pub(crate) fn new(table: &'a DataTable, row: usize) -> Self {
        Self { table, row }
    }

    fn invalid(&self, col: usize, message: String) -> HoneyError {
        HoneyError::InvalidValue {
            row: self.row + 1,
            column: self.table.headers[col].trim().to_string(),
            message,
        }
    }

    /// Non-empty trimmed text.
    pub(crate) fn text(&self, col: usize) -> Result<&'a str> {
        let value = self.table.get(self.row, col).unwrap_or("").trim();
        if DataTable::is_null_value(value) {
            return Err(self.invalid(col, "value is required".to_string()));
        }
        Ok(value)
    }

    /// Float cell, `None` for null tokens.
    pub(crate) fn optional_f64(&self, col: usize) -> Result<Option<f64>> {
        let value = self.table.get(self.row, col).unwrap_or("").trim();
        if DataTable::is_null_value(value) {
            return Ok(None);
        }
        let parsed: f64 = value
            .parse()
            .map_err(|_| self.invalid(col, format!("'{}' is not a number", value)))?;
        if !parsed.is_finite() {
            return Err(self.invalid(col, format!("'{}' is not finite", value)));
        }
        Ok(Some(parsed))
    }

    /// Required float cell.
    pub(crate) fn f64(&self, col: usize) -> Result<f64> {
        self.optional_f64(col)?
            .ok_or_else(|| self.invalid(col, "value is required".to_string()))
    }

    /// Required integer cell. Accepts integral floats such as `"1500.0"`.
    pub(crate) fn i64(&self, col: usize) -> Result<i64> {
        let value = self.text(col)?;
        if let Ok(parsed) = value.parse::<i64>() {
            return Ok(parsed);
        }
        match value.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
            _ => Err(self.invalid(col, format!("'{}' is not an integer", value))),
        }
    }
}
