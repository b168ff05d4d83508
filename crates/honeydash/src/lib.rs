//! honeydash: chart specifications for the USDA honey bee datasets.
//!
//! Two static CSV files are loaded once: quarterly colony stressor figures
//! per state (2015Q1–2018Q4) and annual honey production per state. Three
//! pure builders turn them, plus whatever the user picked in the UI, into
//! serializable [`ChartSpec`]s:
//!
//! - [`build_choropleth`]: one stressor across states for one quarter
//! - [`build_line_chart`]: several stressors over time for one state
//! - [`build_bubble_chart`]: the top-N producing states for one year
//!
//! # Example
//!
//! ```no_run
//! use honeydash::{Dashboard, DashboardConfig};
//!
//! let config = DashboardConfig::new("all_colony_data.csv", "all_honey_data.csv");
//! let dashboard = Dashboard::load(config).unwrap();
//!
//! let map = dashboard.choropleth("2015Q1", "varroa_mites").unwrap();
//! println!("{}", map.to_json_pretty().unwrap());
//! ```

pub mod catalog;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod telemetry;

mod config;
mod dashboard;

pub use catalog::{
    DROPDOWN_STRESSORS, DropdownOption, KNOWN_PERIODS, LINE_CHART_STRESSORS, Period,
    StateDirectory, Stressor, state_dropdown_options, state_names, stressor_dropdown_options,
};
pub use chart::{ChartSpec, build_bubble_chart, build_choropleth, build_line_chart};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DatasetSummary, WidgetDefaults, WidgetOptions};
pub use dataset::{
    ColonyDataset, ColonyRecord, ProductionDataset, ProductionRecord, SourceMetadata,
    load_colony_data, load_production_data,
};
pub use error::{HoneyError, Result};
