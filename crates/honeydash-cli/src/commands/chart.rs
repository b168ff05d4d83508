//! Chart command - build one chart specification and print it.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use honeydash::{ChartSpec, Dashboard};

use crate::cli::{ChartCommand, DataArgs};

pub fn run(
    data: DataArgs,
    chart: ChartCommand,
    output: Option<PathBuf>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = super::load_from_args(&data)?;
    let spec = build(&dashboard, &chart)?;

    let json = if compact {
        spec.to_json()?
    } else {
        spec.to_json_pretty()?
    };

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            eprintln!(
                "{} {} chart to {}",
                "Wrote".green().bold(),
                spec.kind(),
                path.display().to_string().white()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Dispatch a chart subcommand, filling unset options from the config.
pub fn build(dashboard: &Dashboard, chart: &ChartCommand) -> honeydash::Result<ChartSpec> {
    let config = dashboard.config();
    match chart {
        ChartCommand::Choropleth {
            period,
            slider,
            stressor,
        } => {
            let stressor = stressor
                .clone()
                .unwrap_or_else(|| config.default_stressor.id().to_string());
            match (period, slider) {
                (Some(period), _) => dashboard.choropleth(period, &stressor),
                (None, Some(slider)) => dashboard.choropleth_at(*slider, &stressor),
                (None, None) => dashboard.choropleth_at(1, &stressor),
            }
        }
        ChartCommand::Line { state } => {
            dashboard.line_chart(state.as_deref().unwrap_or(config.default_state.as_str()))
        }
        ChartCommand::Bubble { year, top_n } => {
            dashboard.bubble_chart(year.unwrap_or(config.default_year), *top_n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeydash::{
        ColonyDataset, ColonyRecord, DashboardConfig, HoneyError, ProductionDataset,
        ProductionRecord, Stressor,
    };

    fn dashboard() -> Dashboard {
        let colonies = ColonyDataset::from_records(vec![
            ColonyRecord::new("California", "CA", "2015Q1".parse().unwrap())
                .with(Stressor::VarroaMites, 19.1),
        ])
        .unwrap();
        let production = ProductionDataset::from_records(vec![ProductionRecord::new(
            "California",
            2000,
            450,
            59.5,
            83.0,
        )])
        .unwrap();
        Dashboard::new(DashboardConfig::default(), colonies, production).unwrap()
    }

    #[test]
    fn test_defaults_fill_missing_options() {
        let dash = dashboard();

        let spec = build(
            &dash,
            &ChartCommand::Choropleth {
                period: None,
                slider: None,
                stressor: None,
            },
        )
        .unwrap();
        assert_eq!(spec.as_choropleth().unwrap().regions.len(), 1);

        let spec = build(&dash, &ChartCommand::Line { state: None }).unwrap();
        assert_eq!(spec.as_line().unwrap().state, "California");

        let spec = build(
            &dash,
            &ChartCommand::Bubble {
                year: None,
                top_n: None,
            },
        )
        .unwrap();
        assert_eq!(spec.as_bubble().unwrap().top_n, 10);
    }

    #[test]
    fn test_invalid_parameters_surface() {
        let dash = dashboard();
        let err = build(
            &dash,
            &ChartCommand::Line {
                state: Some("Narnia".to_string()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, HoneyError::InvalidState(_)));
    }
}
