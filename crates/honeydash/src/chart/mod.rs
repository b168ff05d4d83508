//! Chart builders: pure functions from a dataset plus UI parameters to a
//! [`ChartSpec`].
//!
//! Each builder validates its parameters against the static catalogs and
//! fails fast on anything outside them. A valid parameter that simply
//! matches no rows yields an empty chart, never an error.

mod bubble;
mod choropleth;
mod line;
mod spec;

pub use bubble::{BUBBLE_SIZE_DIVISOR, Bubble, BubbleChart};
pub use choropleth::{COLOR_DOMAIN, ChoroplethChart, ColorScale, GeoScope, RegionValue};
pub use line::{LINE_PALETTE, LineChart, LinePoint, LineSeries, MaxMarker};
pub use spec::{
    Anchor, Annotation, Axis, ChartSpec, Font, Layout, Legend, Margin, Orientation, Title,
};

use crate::catalog::{Period, Stressor};
use crate::dataset::{ColonyDataset, ProductionDataset};
use crate::error::Result;

/// Credit line placed under the line and bubble charts.
pub const SOURCE_NOTE: &str = "Source: United States Department of Agriculture (USDA)";

/// Choropleth of one stressor across states for one quarter.
///
/// Fails with `InvalidPeriod` unless `period` is one of the 16 survey
/// quarters, and with `InvalidCategory` for an unknown stressor id.
pub fn build_choropleth(data: &ColonyDataset, period: &str, stressor_id: &str) -> Result<ChartSpec> {
    let period = Period::parse_known(period)?;
    let stressor = Stressor::from_id(stressor_id)?;
    Ok(ChoroplethChart::build(data, period, stressor)?.into())
}

/// One line per traced stressor for a single state.
///
/// Fails with `InvalidState` for a name outside the state directory and with
/// `InvalidCategory` for an unknown stressor id.
pub fn build_line_chart<S: AsRef<str>>(
    data: &ColonyDataset,
    stressor_ids: &[S],
    state: &str,
) -> Result<ChartSpec> {
    let stressors = Stressor::from_ids(stressor_ids)?;
    Ok(LineChart::build(data, &stressors, state)?.into())
}

/// Top-N states by colony count for a year, as price/yield bubbles.
///
/// Fails with `InvalidYear` outside the dataset's year range and with
/// `InvalidTopN` when `top_n` is zero.
pub fn build_bubble_chart(data: &ProductionDataset, year: i32, top_n: usize) -> Result<ChartSpec> {
    Ok(BubbleChart::build(data, year, top_n)?.into())
}

/// Large left-aligned title drawn above the plot area.
fn headline(text: String) -> Title {
    Title {
        text,
        x: Some(0.0),
        y: Some(1.05),
        x_anchor: Some(Anchor::Left),
        font: Some(Font::new("Arial", 30, Some("rgb(37,37,37)"))),
    }
}

fn source_annotation() -> Annotation {
    Annotation {
        text: SOURCE_NOTE.to_string(),
        x: 0.5,
        y: -0.1,
        x_anchor: Anchor::Center,
        y_anchor: Anchor::Top,
        font: Font::new("Arial", 12, Some("rgb(150,150,150)")),
        show_arrow: false,
    }
}
