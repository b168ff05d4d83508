//! Summary command - show what the loaded datasets cover.

use colored::Colorize;
use honeydash::{DatasetSummary, SourceMetadata};

use crate::cli::DataArgs;

pub fn run(data: DataArgs, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = super::load_from_args(&data)?;
    let summary = dashboard.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&summary, verbose);
    Ok(())
}

fn print_summary(summary: &DatasetSummary, verbose: bool) {
    println!("{}", "Colony stressors".cyan().bold());
    print_source(&summary.colony, verbose);
    println!(
        "  {} rows, {} states",
        summary.colony_rows.to_string().white().bold(),
        summary.colony_states
    );
    match (summary.periods.first(), summary.periods.last()) {
        (Some(first), Some(last)) => println!(
            "  {} periods ({} to {})",
            summary.periods.len(),
            first,
            last
        ),
        _ => println!("  {}", "no periods".yellow()),
    }

    println!();
    println!("{}", "Honey production".cyan().bold());
    print_source(&summary.production, verbose);
    println!(
        "  {} rows, {} states",
        summary.production_rows.to_string().white().bold(),
        summary.production_states
    );
    match summary.year_range {
        Some((min, max)) => println!("  years {} to {}", min, max),
        None => println!("  {}", "no years".yellow()),
    }
}

fn print_source(source: &SourceMetadata, verbose: bool) {
    println!("  File: {}", source.path.display());
    if verbose {
        println!("  Format: {} ({} bytes)", source.format, source.size_bytes);
        println!("  Hash: {}", source.hash.dimmed());
    }
}
