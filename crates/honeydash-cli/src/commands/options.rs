//! Options command - print widget options for a front end.

use crate::cli::DataArgs;

pub fn run(data: DataArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = super::load_from_args(&data)?;
    println!("{}", serde_json::to_string_pretty(&dashboard.options())?);
    Ok(())
}
