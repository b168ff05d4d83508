//! Honey-bee colony stressor records, one row per state and quarter.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::parser::Parser;
use super::source::{DataTable, RowReader, SourceMetadata};
use super::SliderMarks;
use crate::catalog::{Period, StateDirectory, Stressor};
use crate::error::{HoneyError, Result};

const DATASET: &str = "colony";

/// Percentage of colonies affected by each stressor. `None` means the state
/// reported no figure for that quarter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressorValues {
    pub varroa_mites: Option<f64>,
    pub other_pests: Option<f64>,
    pub other: Option<f64>,
    pub pesticides: Option<f64>,
    pub unknown: Option<f64>,
    pub diseases: Option<f64>,
    pub lost_perc: Option<f64>,
}

impl StressorValues {
    pub fn get(&self, stressor: Stressor) -> Option<f64> {
        match stressor {
            Stressor::VarroaMites => self.varroa_mites,
            Stressor::OtherPests => self.other_pests,
            Stressor::Other => self.other,
            Stressor::Pesticides => self.pesticides,
            Stressor::Unknown => self.unknown,
            Stressor::Diseases => self.diseases,
            Stressor::LostPerc => self.lost_perc,
        }
    }

    pub fn set(&mut self, stressor: Stressor, value: Option<f64>) {
        let slot = match stressor {
            Stressor::VarroaMites => &mut self.varroa_mites,
            Stressor::OtherPests => &mut self.other_pests,
            Stressor::Other => &mut self.other,
            Stressor::Pesticides => &mut self.pesticides,
            Stressor::Unknown => &mut self.unknown,
            Stressor::Diseases => &mut self.diseases,
            Stressor::LostPerc => &mut self.lost_perc,
        };
        *slot = value;
    }
}

/// One observation of colony stressors for a state in a quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyRecord {
    pub state: String,
    pub state_code: String,
    pub period: Period,
    #[serde(flatten)]
    pub stressors: StressorValues,
}

impl ColonyRecord {
    pub fn new(state: impl Into<String>, state_code: impl Into<String>, period: Period) -> Self {
        Self {
            state: state.into(),
            state_code: state_code.into(),
            period,
            stressors: StressorValues::default(),
        }
    }

    /// Builder-style setter, mostly for fixtures.
    pub fn with(mut self, stressor: Stressor, value: f64) -> Self {
        self.stressors.set(stressor, Some(value));
        self
    }

    pub fn value(&self, stressor: Stressor) -> Option<f64> {
        self.stressors.get(stressor)
    }
}

/// The loaded colony dataset. Immutable once built.
#[derive(Debug, Clone)]
pub struct ColonyDataset {
    records: Vec<ColonyRecord>,
    source: SourceMetadata,
}

impl ColonyDataset {
    /// Load the colony CSV with default parser settings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(&Parser::new(), path)
    }

    /// Load the colony CSV with an explicit parser.
    pub fn load_with(parser: &Parser, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let (table, source) = parser.parse_file(path)?;
        let dataset = Self::from_table(&table, source)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            periods = dataset.distinct_periods().len(),
            "loaded colony data"
        );
        Ok(dataset)
    }

    /// Convert a parsed table, checking required columns and value ranges.
    pub fn from_table(table: &DataTable, source: SourceMetadata) -> Result<Self> {
        let state_col = table.require_column(DATASET, "state")?;
        let code_col = table.require_column(DATASET, "state_code")?;
        let period_col = table.require_column(DATASET, "period")?;
        let stressor_cols = Stressor::ALL
            .iter()
            .map(|&s| table.require_column(DATASET, s.id()).map(|col| (s, col)))
            .collect::<Result<Vec<_>>>()?;

        let mut records = Vec::with_capacity(table.row_count());
        for row in 0..table.row_count() {
            let reader = RowReader::new(table, row);

            let period_token = reader.text(period_col)?;
            let period: Period = period_token.parse().map_err(|_| HoneyError::InvalidValue {
                row: row + 1,
                column: "period".to_string(),
                message: format!("'{}' is not a survey quarter", period_token),
            })?;

            let mut record = ColonyRecord::new(
                reader.text(state_col)?,
                reader.text(code_col)?.to_ascii_uppercase(),
                period,
            );
            for &(stressor, col) in &stressor_cols {
                record.stressors.set(stressor, reader.optional_f64(col)?);
            }
            records.push(record);
        }

        Self::build(records, source)
    }

    /// Build a dataset from records already in memory.
    pub fn from_records(records: Vec<ColonyRecord>) -> Result<Self> {
        let source = SourceMetadata::in_memory(records.len(), 3 + Stressor::ALL.len());
        Self::build(records, source)
    }

    /// Every constructor ends here, so in-memory records meet the same rules
    /// as loaded ones.
    fn build(records: Vec<ColonyRecord>, source: SourceMetadata) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            let row = idx + 1;
            check_record(record, row)?;
            // Keyed on the code too: the map draws one region per code
            if !seen.insert((record.state_code.as_str(), record.period)) {
                return Err(HoneyError::DuplicateKey {
                    dataset: DATASET,
                    key: format!("({}, {})", record.state, record.period),
                    row,
                });
            }
        }
        Ok(Self { records, source })
    }

    pub fn records(&self) -> &[ColonyRecord] {
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

    /// Unique periods in first-seen order.
    pub fn distinct_periods(&self) -> Vec<Period> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.period)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Slider marks mapping a 1-based position to a period token.
    pub fn period_slider(&self) -> SliderMarks {
        let marks: SliderMarks = self
            .distinct_periods()
            .into_iter()
            .enumerate()
            .map(|(i, p)| ((i + 1) as i32, p.to_string()))
            .collect();
        debug!(marks = marks.len(), "built period slider");
        marks
    }

    /// Records observed in the given quarter, in row order.
    pub fn for_period(&self, period: Period) -> impl Iterator<Item = &ColonyRecord> {
        self.records.iter().filter(move |r| r.period == period)
    }

    /// Records for the given state, in row order.
    pub fn for_state<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a ColonyRecord> {
        self.records.iter().filter(move |r| r.state == state)
    }
}

fn check_record(record: &ColonyRecord, row: usize) -> Result<()> {
    let invalid = |column: &str, message: String| HoneyError::InvalidValue {
        row,
        column: column.to_string(),
        message,
    };

    if !record.period.is_known() {
        return Err(invalid(
            "period",
            format!("'{}' is not a known survey quarter", record.period),
        ));
    }

    let expected = StateDirectory::code_for(&record.state)
        .ok_or_else(|| invalid("state", format!("'{}' is not a known state", record.state)))?;
    if record.state_code != expected {
        return Err(invalid(
            "state_code",
            format!(
                "'{}' does not match {} ({})",
                record.state_code, record.state, expected
            ),
        ));
    }

    for stressor in Stressor::ALL {
        if let Some(v) = record.value(stressor) {
            if !(0.0..=100.0).contains(&v) {
                return Err(invalid(
                    stressor.id(),
                    format!("percentage {} is outside [0, 100]", v),
                ));
            }
        }
    }
    Ok(())
}
