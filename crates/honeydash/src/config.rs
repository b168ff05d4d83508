//! Dashboard configuration, loadable from a JSON file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{DROPDOWN_STRESSORS, LINE_CHART_STRESSORS, StateDirectory, Stressor};
use crate::dataset::ParserConfig;
use crate::error::{HoneyError, Result};

/// Settings for a dashboard instance.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Colony stressor CSV.
    pub colony_path: PathBuf,
    /// Honey production CSV.
    pub production_path: PathBuf,
    /// CSV reader settings shared by both files.
    pub parser: ParserConfig,
    /// Number of states in the bubble chart.
    pub bubble_top_n: usize,
    /// Slider width in pixels, passed through to the UI.
    pub slider_size: u32,
    /// Stressors traced by the line chart, in color order.
    pub line_stressors: Vec<Stressor>,
    /// Initial dropdown and slider selections.
    pub default_stressor: Stressor,
    pub default_state: String,
    pub default_year: i32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            colony_path: PathBuf::from("all_colony_data.csv"),
            production_path: PathBuf::from("all_honey_data.csv"),
            parser: ParserConfig::default(),
            bubble_top_n: 10,
            slider_size: 700,
            line_stressors: LINE_CHART_STRESSORS.to_vec(),
            default_stressor: Stressor::VarroaMites,
            default_state: "California".to_string(),
            default_year: 2000,
        }
    }
}

impl DashboardConfig {
    pub fn new(colony_path: impl Into<PathBuf>, production_path: impl Into<PathBuf>) -> Self {
        Self {
            colony_path: colony_path.into(),
            production_path: production_path.into(),
            ..Self::default()
        }
    }

    pub fn with_bubble_top_n(mut self, n: usize) -> Self {
        self.bubble_top_n = n;
        self
    }

    pub fn with_slider_size(mut self, size: u32) -> Self {
        self.slider_size = size;
        self
    }

    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<()> {
        if self.bubble_top_n == 0 {
            return Err(HoneyError::Config(
                "bubble_top_n must be at least 1".to_string(),
            ));
        }
        if self.line_stressors.is_empty() {
            return Err(HoneyError::Config(
                "line_stressors must name at least one stressor".to_string(),
            ));
        }
        if !DROPDOWN_STRESSORS.contains(&self.default_stressor) {
            return Err(HoneyError::Config(format!(
                "default_stressor '{}' is not offered by the stressor dropdown",
                self.default_stressor
            )));
        }
        if !StateDirectory::contains(&self.default_state) {
            return Err(HoneyError::Config(format!(
                "default_state '{}' is not a known state",
                self.default_state
            )));
        }
        Ok(())
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            HoneyError::Config(format!("Failed to open file '{}': {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let config: DashboardConfig = serde_json::from_reader(reader).map_err(|e| {
            HoneyError::Config(format!("Failed to parse config '{}': {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    HoneyError::Config(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            HoneyError::Config(format!("Failed to create file '{}': {}", path.display(), e))
        })?;

        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
