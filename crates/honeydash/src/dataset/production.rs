//! Annual honey production records, one row per state and year.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::parser::Parser;
use super::source::{DataTable, RowReader, SourceMetadata};
use super::SliderMarks;
use crate::error::{HoneyError, Result};

const DATASET: &str = "production";

/// Honey production figures for a state in a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub state: String,
    pub year: i32,
    /// Honey-producing colonies, in thousands.
    pub honey_colonies: u64,
    /// Average price per pound, in cents.
    pub avg_price_per_lb: f64,
    /// Average yield per colony, in pounds.
    pub yield_per_col: f64,
}

impl ProductionRecord {
    pub fn new(
        state: impl Into<String>,
        year: i32,
        honey_colonies: u64,
        avg_price_per_lb: f64,
        yield_per_col: f64,
    ) -> Self {
        Self {
            state: state.into(),
            year,
            honey_colonies,
            avg_price_per_lb,
            yield_per_col,
        }
    }
}

/// The loaded production dataset. Immutable once built.
#[derive(Debug, Clone)]
pub struct ProductionDataset {
    records: Vec<ProductionRecord>,
    source: SourceMetadata,
}

impl ProductionDataset {
    /// Load the production CSV with default parser settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(&Parser::new(), path)
    }

    /// Load the production CSV with an explicit parser.
    pub fn load_with(parser: &Parser, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (table, source) = parser.parse_file(path)?;
        let dataset = Self::from_table(&table, source)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            years = ?dataset.year_range(),
            "loaded production data"
        );
        Ok(dataset)
    }

    /// Convert a parsed table, checking required columns and value types.
    pub fn from_table(table: &DataTable, source: SourceMetadata) -> Result<Self> {
        let state_col = table.require_column(DATASET, "state")?;
        let year_col = table.require_column(DATASET, "year")?;
        let colonies_col = table.require_column(DATASET, "honey_colonies")?;
        let price_col = table.require_column(DATASET, "avg_price_per_lb")?;
        let yield_col = table.require_column(DATASET, "yield_per_col")?;

        let mut records = Vec::with_capacity(table.row_count());
        for row in 0..table.row_count() {
            let reader = RowReader::new(table, row);

            let year = reader.i64(year_col)?;
            let year = i32::try_from(year).map_err(|_| HoneyError::InvalidValue {
                row: row + 1,
                column: "year".to_string(),
                message: format!("{} is not a calendar year", year),
            })?;

            let colonies = reader.i64(colonies_col)?;
            let colonies = u64::try_from(colonies).map_err(|_| HoneyError::InvalidValue {
                row: row + 1,
                column: "honey_colonies".to_string(),
                message: format!("colony count {} is negative", colonies),
            })?;

            records.push(ProductionRecord::new(
                reader.text(state_col)?,
                year,
                colonies,
                reader.f64(price_col)?,
                reader.f64(yield_col)?,
            ));
        }

        Self::build(records, source)
    }

    /// Build a dataset from records already in memory.
    pub fn from_records(records: Vec<ProductionRecord>) -> Result<Self> {
        let source = SourceMetadata::in_memory(records.len(), 5);
        Self::build(records, source)
    }

    fn build(records: Vec<ProductionRecord>, source: SourceMetadata) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;
            for (column, value) in [
                ("avg_price_per_lb", record.avg_price_per_lb),
                ("yield_per_col", record.yield_per_col),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(HoneyError::InvalidValue {
                        row,
                        column: column.to_string(),
                        message: format!("{} must be a non-negative number", value),
                    });
                }
            }
            if !seen.insert((record.state.as_str(), record.year)) {
                return Err(HoneyError::DuplicateKey {
                    dataset: DATASET,
                    key: format!("({}, {})", record.state, record.year),
                    row,
                });
            }
        }
        Ok(Self { records, source })
    }

    pub fn records(&self) -> &[ProductionRecord] {
        &self.records
    }

    pub fn source(&self) -> &SourceMetadata {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inclusive `(first, last)` year covered, or `None` when empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Whether the year lies inside [`year_range`](Self::year_range).
    pub fn covers_year(&self, year: i32) -> bool {
        self.year_range()
            .is_some_and(|(min, max)| (min..=max).contains(&year))
    }

    /// Slider marks for every year in the covered range.
    pub fn year_slider(&self) -> SliderMarks {
        match self.year_range() {
            Some((min, max)) => (min..=max).map(|y| (y, y.to_string())).collect(),
            None => SliderMarks::new(),
        }
    }

    /// Records for the given year, in row order.
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &ProductionRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }
}
