//! Error types for the honeydash library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for honeydash operations.
#[derive(Debug, Error)]
pub enum HoneyError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data rows.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A required column is absent from the header row.
    #[error("Missing required column '{column}' in {dataset} data")]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
    },

    /// A cell could not be converted to the column's type or is out of range.
    #[error("Invalid value at row {row}, column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: String,
        message: String,
    },

    /// Two rows share the same natural key.
    #[error("Duplicate {dataset} row for {key} at row {row}")]
    DuplicateKey {
        dataset: &'static str,
        key: String,
        row: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Period token outside the known quarterly windows.
    #[error("Unknown period '{0}': expected one of 2015Q1..2018Q4")]
    InvalidPeriod(String),

    /// Stressor identifier not present in the catalog.
    #[error("Unknown stressor category '{0}'")]
    InvalidCategory(String),

    /// State name not present in the state directory.
    #[error("Unknown state '{0}'")]
    InvalidState(String),

    /// Year outside the production dataset's covered range.
    #[error("Year {year} is outside the covered range {range}")]
    InvalidYear { year: i32, range: String },

    /// Top-N count must be at least one.
    #[error("Top-N count must be positive, got {0}")]
    InvalidTopN(usize),
}

impl HoneyError {
    /// Returns true for errors raised while loading source files.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            HoneyError::Io { .. }
                | HoneyError::Csv(_)
                | HoneyError::EmptyData(_)
                | HoneyError::MissingColumn { .. }
                | HoneyError::InvalidValue { .. }
                | HoneyError::DuplicateKey { .. }
        )
    }

    /// Returns true for errors caused by a chart parameter outside its domain.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            HoneyError::InvalidPeriod(_)
                | HoneyError::InvalidCategory(_)
                | HoneyError::InvalidState(_)
                | HoneyError::InvalidYear { .. }
                | HoneyError::InvalidTopN(_)
        )
    }
}

/// Result type alias for honeydash operations.
pub type Result<T> = std::result::Result<T, HoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = HoneyError::InvalidPeriod("2014Q1".to_string());
        assert!(err.is_parameter_error());
        assert!(!err.is_load_error());

        let err = HoneyError::MissingColumn {
            dataset: "colony",
            column: "period",
        };
        assert!(err.is_load_error());
        assert!(!err.is_parameter_error());
    }

    #[test]
    fn test_error_messages() {
        let err = HoneyError::InvalidYear {
            year: 1999,
            range: "2000..=2018".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Year 1999 is outside the covered range 2000..=2018"
        );
    }
}
