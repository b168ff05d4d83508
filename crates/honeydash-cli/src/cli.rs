//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use honeydash::{DashboardConfig, HoneyError};

/// honeydash: USDA honey bee dashboard backend
#[derive(Parser)]
#[command(name = "honeydash")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where to find the datasets.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Colony stressor CSV (default: all_colony_data.csv)
    #[arg(long, value_name = "FILE")]
    pub colony: Option<PathBuf>,

    /// Honey production CSV (default: all_honey_data.csv)
    #[arg(long, value_name = "FILE")]
    pub production: Option<PathBuf>,

    /// Dashboard configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Field delimiter for both files (default: auto-detect)
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl DataArgs {
    /// Resolve the configuration: file first, then flag overrides.
    pub fn to_config(&self) -> Result<DashboardConfig, HoneyError> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::load(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(path) = &self.colony {
            config.colony_path = path.clone();
        }
        if let Some(path) = &self.production {
            config.production_path = path.clone();
        }
        if self.delimiter.is_some() {
            config.parser.delimiter = self.delimiter;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve chart specifications over a JSON API
    Serve {
        #[command(flatten)]
        data: DataArgs,

        /// Port for web server
        #[arg(short, long, default_value = "8050")]
        port: u16,

        /// Number of states in the bubble chart
        #[arg(long)]
        top_n: Option<usize>,

        /// Slider width reported to the UI, in pixels
        #[arg(long)]
        slider_size: Option<u32>,
    },

    /// Build one chart and print it as JSON
    Chart {
        #[command(flatten)]
        data: DataArgs,

        /// Write the chart to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,

        #[command(subcommand)]
        chart: ChartCommand,
    },

    /// Show what the datasets cover
    Summary {
        #[command(flatten)]
        data: DataArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print dropdown and slider options as JSON
    Options {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ChartCommand {
    /// Map of one stressor across states for one quarter
    Choropleth {
        /// Period token, e.g. 2015Q1
        #[arg(long, conflicts_with = "slider")]
        period: Option<String>,

        /// 1-based position on the period slider
        #[arg(long)]
        slider: Option<i32>,

        /// Stressor id (varroa_mites, other_pests, other, pesticides, unknown, diseases, lost_perc)
        #[arg(long)]
        stressor: Option<String>,
    },

    /// Stressor trends for one state
    Line {
        /// Full state name (default from config)
        #[arg(long)]
        state: Option<String>,
    },

    /// Top producing states for one year
    Bubble {
        /// Year (default from config)
        #[arg(long)]
        year: Option<i32>,

        /// Number of states (default from config)
        #[arg(long)]
        top_n: Option<usize>,
    },
}
