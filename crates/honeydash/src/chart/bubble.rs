//! Top-N honey producing states as a price/yield bubble chart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::spec::{Axis, Layout};
use super::{headline, source_annotation};
use crate::dataset::{ProductionDataset, ProductionRecord};
use crate::error::{HoneyError, Result};

/// Colony count (thousands) per unit of bubble size. A fixed divisor keeps
/// bubble sizes comparable between years.
pub const BUBBLE_SIZE_DIVISOR: f64 = 5.0;

const BUBBLE_OPACITY: f64 = 0.6;

/// One state's bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub state: String,
    /// Average price per pound in dollars.
    pub x: f64,
    /// Yield per colony in pounds.
    pub y: f64,
    /// Colony count in thousands.
    pub colonies: u64,
    pub size: f64,
    pub opacity: f64,
    pub hover_text: String,
}

impl Bubble {
    fn from_record(record: &ProductionRecord) -> Self {
        Self {
            state: record.state.clone(),
            x: record.avg_price_per_lb / 100.0,
            y: record.yield_per_col,
            colonies: record.honey_colonies,
            size: record.honey_colonies as f64 / BUBBLE_SIZE_DIVISOR,
            opacity: BUBBLE_OPACITY,
            hover_text: format!(
                "{}<br>No. of Colonies: {}k",
                record.state, record.honey_colonies
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleChart {
    pub layout: Layout,
    pub year: i32,
    /// Requested count; `bubbles` may hold fewer.
    pub top_n: usize,
    /// Largest colony count first.
    pub bubbles: Vec<Bubble>,
}

impl BubbleChart {
    /// Rank the states of `year` by colony count and keep the first `top_n`.
    ///
    /// Equal counts are ordered by state name, then by row order. Asking for
    /// more states than the year has returns all of them.
    pub fn build(data: &ProductionDataset, year: i32, top_n: usize) -> Result<Self> {
        if !data.covers_year(year) {
            let range = match data.year_range() {
                Some((min, max)) => format!("{}..={}", min, max),
                None => "(no production data)".to_string(),
            };
            return Err(HoneyError::InvalidYear { year, range });
        }
        if top_n == 0 {
            return Err(HoneyError::InvalidTopN(top_n));
        }

        let mut ranked: Vec<&ProductionRecord> = data.for_year(year).collect();
        ranked.sort_by(|a, b| {
            b.honey_colonies
                .cmp(&a.honey_colonies)
                .then_with(|| a.state.cmp(&b.state))
        });

        let bubbles: Vec<Bubble> = ranked
            .into_iter()
            .take(top_n)
            .map(Bubble::from_record)
            .collect();

        debug!(year, top_n, bubbles = bubbles.len(), "built bubble chart");

        let mut layout = Layout::new(
            headline(format!(
                "Top {} Honey Producing States In the Year {}",
                top_n, year
            )),
            800,
            600,
        );
        layout.x_axis = Some(Axis {
            title: Some("Avg. Price Per Pound ($US)".to_string()),
            show_line: true,
            show_tick_labels: true,
            ..Axis::default()
        });
        layout.y_axis = Some(Axis {
            title: Some("Yield Per Colony (lbs.)".to_string()),
            show_line: true,
            show_tick_labels: true,
            ..Axis::default()
        });
        layout.annotations.push(source_annotation());
        layout.plot_background = Some("white".to_string());

        Ok(Self {
            layout,
            year,
            top_n,
            bubbles,
        })
    }
}
