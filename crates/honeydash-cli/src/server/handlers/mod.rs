//! API request handlers.

mod charts;
mod options;

pub use charts::*;
pub use options::*;
