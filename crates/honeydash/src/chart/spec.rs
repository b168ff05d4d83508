//! Renderer-agnostic chart descriptions.
//!
//! A [`ChartSpec`] is plain data: geometry, per-series styling, axis and
//! legend configuration, and text. Field names follow the vocabulary of
//! common web charting front ends so a thin client can map them directly.

use serde::{Deserialize, Serialize};

use super::bubble::BubbleChart;
use super::choropleth::ChoroplethChart;
use super::line::LineChart;
use crate::error::Result;

/// One of the three dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Choropleth(ChoroplethChart),
    Line(LineChart),
    Bubble(BubbleChart),
}

impl ChartSpec {
    /// Short name of the chart kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ChartSpec::Choropleth(_) => "choropleth",
            ChartSpec::Line(_) => "line",
            ChartSpec::Bubble(_) => "bubble",
        }
    }

    pub fn layout(&self) -> &Layout {
        match self {
            ChartSpec::Choropleth(c) => &c.layout,
            ChartSpec::Line(c) => &c.layout,
            ChartSpec::Bubble(c) => &c.layout,
        }
    }

    pub fn title(&self) -> &str {
        &self.layout().title.text
    }

    /// True when the chart has no geometry to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Choropleth(c) => c.regions.is_empty(),
            ChartSpec::Line(c) => c.series.iter().all(|s| s.points.is_empty()),
            ChartSpec::Bubble(c) => c.bubbles.is_empty(),
        }
    }

    pub fn as_choropleth(&self) -> Option<&ChoroplethChart> {
        match self {
            ChartSpec::Choropleth(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineChart> {
        match self {
            ChartSpec::Line(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_bubble(&self) -> Option<&BubbleChart> {
        match self {
            ChartSpec::Bubble(c) => Some(c),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<ChoroplethChart> for ChartSpec {
    fn from(chart: ChoroplethChart) -> Self {
        ChartSpec::Choropleth(chart)
    }
}

impl From<LineChart> for ChartSpec {
    fn from(chart: LineChart) -> Self {
        ChartSpec::Line(chart)
    }
}

impl From<BubbleChart> for ChartSpec {
    fn from(chart: BubbleChart) -> Self {
        ChartSpec::Bubble(chart)
    }
}

/// Font settings for titles, ticks and annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    pub fn new(family: &str, size: u32, color: Option<&str>) -> Self {
        Self {
            family: family.to_string(),
            size,
            color: color.map(str::to_string),
        }
    }
}

/// Horizontal or vertical anchoring of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Chart title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    /// Position in paper coordinates, `None` for the renderer default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    /// A title placed wherever the renderer puts titles by default.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: None,
            y: None,
            x_anchor: None,
            font: None,
        }
    }
}

/// Free text placed in paper coordinates (0..1 across the plot area).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub x_anchor: Anchor,
    pub y_anchor: Anchor,
    pub font: Font,
    pub show_arrow: bool,
}

/// Axis configuration. Unset fields fall back to renderer defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub show_line: bool,
    pub show_grid: bool,
    pub show_tick_labels: bool,
    pub zero_line: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
    /// Tick placement, e.g. `"outside"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_font: Option<Font>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tick_values: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tick_text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_angle: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub show: bool,
    pub orientation: Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            show: true,
            orientation: Orientation::Vertical,
            x: None,
            y: None,
        }
    }
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub auto_expand: bool,
}

/// Figure-level settings shared by every chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    pub legend: Legend,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

impl Layout {
    pub fn new(title: Title, width: u32, height: u32) -> Self {
        Self {
            title,
            width,
            height,
            x_axis: None,
            y_axis: None,
            legend: Legend::default(),
            annotations: Vec::new(),
            plot_background: None,
            margin: None,
        }
    }
}
