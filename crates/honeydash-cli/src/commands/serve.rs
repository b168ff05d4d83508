//! Serve command - expose the chart builders over a JSON API.

use colored::Colorize;

use crate::cli::DataArgs;
use crate::server::{app, state::AppState};

pub fn run(
    data: DataArgs,
    port: u16,
    top_n: Option<usize>,
    slider_size: Option<u32>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = data.to_config()?;
    if let Some(n) = top_n {
        config.bubble_top_n = n;
    }
    if let Some(size) = slider_size {
        config.slider_size = size;
    }

    let dashboard = super::load_dashboard(config)?;
    let summary = dashboard.summary();
    let state = AppState::new(dashboard);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting dashboard API at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!(
        "  Colony data: {} ({} rows)",
        summary.colony.path.display(),
        summary.colony_rows
    );
    println!(
        "  Production data: {} ({} rows)",
        summary.production.path.display(),
        summary.production_rows
    );
    if verbose {
        println!("  Periods: {}", summary.periods.len());
        if let Some((min, max)) = summary.year_range {
            println!("  Years: {} to {}", min, max);
        }
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port))
}
