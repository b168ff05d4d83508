//! honeydash CLI - chart specifications for the USDA honey bee dashboard.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let _ = honeydash::telemetry::init_default_tracing(level);

    let result = match cli.command {
        Commands::Serve {
            data,
            port,
            top_n,
            slider_size,
        } => commands::serve::run(data, port, top_n, slider_size, cli.verbose),

        Commands::Chart {
            data,
            output,
            compact,
            chart,
        } => commands::chart::run(data, chart, output, compact),

        Commands::Summary { data, json } => commands::summary::run(data, json, cli.verbose),

        Commands::Options { data } => commands::options::run(data),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
