//! The dashboard handle: both datasets plus configuration.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{
    DropdownOption, Period, Stressor, state_dropdown_options, stressor_dropdown_options,
};
use crate::chart::{self, ChartSpec};
use crate::config::DashboardConfig;
use crate::dataset::{ColonyDataset, Parser, ProductionDataset, SliderMarks, SourceMetadata};
use crate::error::{HoneyError, Result};

/// Values the UI needs to populate its widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub stressors: Vec<DropdownOption>,
    pub states: Vec<DropdownOption>,
    /// 1-based slider position → period token.
    pub period_slider: SliderMarks,
    /// Year → label.
    pub year_slider: SliderMarks,
    pub slider_size: u32,
    pub defaults: WidgetDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub stressor: Stressor,
    pub period_index: i32,
    pub state: String,
    pub year: i32,
}

/// Overview of what was loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub colony: SourceMetadata,
    pub production: SourceMetadata,
    pub colony_rows: usize,
    pub production_rows: usize,
    pub periods: Vec<Period>,
    pub year_range: Option<(i32, i32)>,
    pub colony_states: usize,
    pub production_states: usize,
}

/// Immutable handle over the loaded datasets.
///
/// Chart methods delegate to the pure builders in [`crate::chart`], so the
/// handle can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    colonies: ColonyDataset,
    production: ProductionDataset,
}

impl Dashboard {
    /// Load both files named in the configuration.
    pub fn load(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let parser = Parser::with_config(config.parser.clone());
        let colonies = ColonyDataset::load_with(&parser, &config.colony_path)?;
        let production = ProductionDataset::load_with(&parser, &config.production_path)?;
        info!(
            colony_rows = colonies.len(),
            production_rows = production.len(),
            "dashboard ready"
        );
        Self::new(config, colonies, production)
    }

    /// Assemble a dashboard from datasets already in memory.
    pub fn new(
        config: DashboardConfig,
        colonies: ColonyDataset,
        production: ProductionDataset,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            colonies,
            production,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn colonies(&self) -> &ColonyDataset {
        &self.colonies
    }

    pub fn production(&self) -> &ProductionDataset {
        &self.production
    }

    /// Choropleth for a period token and stressor id.
    pub fn choropleth(&self, period: &str, stressor: &str) -> Result<ChartSpec> {
        chart::build_choropleth(&self.colonies, period, stressor)
    }

    /// Choropleth for a 1-based period slider position.
    pub fn choropleth_at(&self, slider: i32, stressor: &str) -> Result<ChartSpec> {
        let slider_marks = self.colonies.period_slider();
        let period = slider_marks
            .get(&slider)
            .ok_or_else(|| HoneyError::InvalidPeriod(format!("slider position {}", slider)))?;
        self.choropleth(period, stressor)
    }

    /// Line chart of the configured stressors for a state.
    pub fn line_chart(&self, state: &str) -> Result<ChartSpec> {
        let stressors: Vec<&str> = self.config.line_stressors.iter().map(|s| s.id()).collect();
        chart::build_line_chart(&self.colonies, &stressors, state)
    }

    /// Bubble chart for a year, using the configured N unless overridden.
    pub fn bubble_chart(&self, year: i32, top_n: Option<usize>) -> Result<ChartSpec> {
        let n = top_n.unwrap_or(self.config.bubble_top_n);
        chart::build_bubble_chart(&self.production, year, n)
    }

    /// Widget option lists and initial selections.
    pub fn options(&self) -> WidgetOptions {
        WidgetOptions {
            stressors: stressor_dropdown_options(),
            states: state_dropdown_options(),
            period_slider: self.colonies.period_slider(),
            year_slider: self.production.year_slider(),
            slider_size: self.config.slider_size,
            defaults: WidgetDefaults {
                stressor: self.config.default_stressor,
                period_index: 1,
                state: self.config.default_state.clone(),
                year: self.config.default_year,
            },
        }
    }

    /// Row counts, coverage and source metadata for both datasets.
    pub fn summary(&self) -> DatasetSummary {
        let mut colony_states: Vec<&str> = self
            .colonies
            .records()
            .iter()
            .map(|r| r.state.as_str())
            .collect();
        colony_states.sort_unstable();
        colony_states.dedup();

        let mut production_states: Vec<&str> = self
            .production
            .records()
            .iter()
            .map(|r| r.state.as_str())
            .collect();
        production_states.sort_unstable();
        production_states.dedup();

        DatasetSummary {
            colony: self.colonies.source().clone(),
            production: self.production.source().clone(),
            colony_rows: self.colonies.len(),
            production_rows: self.production.len(),
            periods: self.colonies.distinct_periods(),
            year_range: self.production.year_range(),
            colony_states: colony_states.len(),
            production_states: production_states.len(),
        }
    }
}
