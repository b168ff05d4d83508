//! CLI command implementations.

pub mod chart;
pub mod options;
pub mod serve;
pub mod summary;

use honeydash::{Dashboard, DashboardConfig};

use crate::cli::DataArgs;

/// Load both datasets, reporting which file failed.
pub fn load_dashboard(config: DashboardConfig) -> Result<Dashboard, Box<dyn std::error::Error>> {
    for path in [&config.colony_path, &config.production_path] {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }
    Ok(Dashboard::load(config)?)
}

/// Resolve config from arguments and load.
pub fn load_from_args(data: &DataArgs) -> Result<Dashboard, Box<dyn std::error::Error>> {
    load_dashboard(data.to_config()?)
}
