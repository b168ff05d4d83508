//! Loading the colony and production CSV files and querying them.

mod colony;
mod parser;
mod production;
mod source;

pub use colony::{ColonyDataset, ColonyRecord, StressorValues};
pub use parser::{Delimiter, Parser, ParserConfig};
pub use production::{ProductionDataset, ProductionRecord};
pub use source::{DataTable, SourceMetadata};

use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;

/// Slider tick labels keyed by slider value.
pub type SliderMarks = IndexMap<i32, String>;

/// Load the colony stressor dataset.
pub fn load_colony_data(path: impl AsRef<Path>) -> Result<ColonyDataset> {
    ColonyDataset::load(path)
}

/// Load the honey production dataset.
pub fn load_production_data(path: impl AsRef<Path>) -> Result<ProductionDataset> {
    ProductionDataset::load(path)
}
