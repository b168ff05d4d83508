//! Multi-stressor line chart for a single state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::spec::{Axis, Font, Layout, Legend, Margin, Orientation};
use super::{headline, source_annotation};
use crate::catalog::{KNOWN_PERIODS, Period, StateDirectory, Stressor};
use crate::dataset::{ColonyDataset, ColonyRecord};
use crate::error::Result;

/// Series colors, assigned by position in the trace list.
pub const LINE_PALETTE: [&str; 7] = [
    "crimson",
    "LightSkyBlue",
    "MediumPurple",
    "green",
    "orange",
    "yellowgreen",
    "brown",
];

const LINE_WIDTH: u32 = 4;
const MARKER_SIZE: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub period: Period,
    /// `None` where the state reported nothing; renderers bridge the gap.
    pub value: Option<f64>,
}

/// Highlighted maximum of a series, labelled with its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxMarker {
    pub period: Period,
    pub value: f64,
    pub text: String,
    pub size: u32,
    pub text_position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub stressor: Stressor,
    pub name: String,
    pub color: String,
    pub line_width: u32,
    pub connect_gaps: bool,
    pub points: Vec<LinePoint>,
    pub max_marker: Option<MaxMarker>,
}

impl LineSeries {
    fn build(stressor: Stressor, color: &str, records: &[&ColonyRecord]) -> Self {
        let points: Vec<LinePoint> = records
            .iter()
            .map(|r| LinePoint {
                period: r.period,
                value: r.value(stressor),
            })
            .collect();

        Self {
            stressor,
            name: stressor.id().to_string(),
            color: color.to_string(),
            line_width: LINE_WIDTH,
            connect_gaps: true,
            max_marker: max_marker(&points),
            points,
        }
    }

    /// Values present in the series, in period order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|p| p.value)
    }
}

/// First chronological occurrence of the largest value.
fn max_marker(points: &[LinePoint]) -> Option<MaxMarker> {
    let mut best: Option<(Period, f64)> = None;
    for point in points {
        if let Some(value) = point.value {
            if best.is_none_or(|(_, max)| value > max) {
                best = Some((point.period, value));
            }
        }
    }

    best.map(|(period, value)| MaxMarker {
        period,
        value,
        text: marker_text(value),
        size: MARKER_SIZE,
        text_position: "middle right".to_string(),
    })
}

/// Two-decimal label such as `30.0%` or `12.35%`.
///
/// Precision formatting rounds the exact binary value with ties to even, so
/// `0.125` labels as `0.12%`. Whole numbers keep one decimal place.
fn marker_text(value: f64) -> String {
    let rounded: f64 = format!("{:.2}", value).parse().unwrap_or(value);
    if rounded.fract() == 0.0 {
        format!("{:.1}%", rounded)
    } else {
        format!("{}%", rounded)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub layout: Layout,
    pub state: String,
    pub series: Vec<LineSeries>,
}

impl LineChart {
    /// Build one series per stressor in `stressors` for `state`.
    ///
    /// A state with no rows still gets every series, each without points or
    /// a marker.
    pub fn build(data: &ColonyDataset, stressors: &[Stressor], state: &str) -> Result<Self> {
        let state = StateDirectory::require(state)?;

        let mut records: Vec<&ColonyRecord> = data.for_state(state).collect();
        records.sort_by_key(|r| r.period);

        let series: Vec<LineSeries> = stressors
            .iter()
            .enumerate()
            .map(|(i, &stressor)| {
                LineSeries::build(stressor, LINE_PALETTE[i % LINE_PALETTE.len()], &records)
            })
            .collect();

        debug!(
            state,
            rows = records.len(),
            series = series.len(),
            "built line chart"
        );

        let mut layout = Layout::new(
            headline(format!("Bee Colony Stressors in the State of {}", state)),
            800,
            500,
        );
        layout.x_axis = Some(period_axis());
        layout.y_axis = Some(Axis::default());
        layout.legend = Legend {
            show: true,
            orientation: Orientation::Horizontal,
            x: Some(0.0),
            y: Some(1.04),
        };
        layout.annotations.push(source_annotation());
        layout.plot_background = Some("white".to_string());
        layout.margin = Some(Margin {
            left: 100,
            right: 20,
            top: 110,
            auto_expand: false,
        });

        Ok(Self {
            layout,
            state: state.to_string(),
            series,
        })
    }
}

/// X axis with a tick at every quarter, labelled only at each year's Q1.
fn period_axis() -> Axis {
    let tick_text = KNOWN_PERIODS
        .iter()
        .map(|token| match token.split_once('Q') {
            Some((year, "1")) => year.to_string(),
            _ => String::new(),
        })
        .collect();

    Axis {
        show_line: true,
        show_tick_labels: true,
        line_color: Some("rgb(204, 204, 204)".to_string()),
        line_width: Some(2),
        ticks: Some("outside".to_string()),
        tick_font: Some(Font::new("Rockwell", 12, Some("rgb(82, 82, 82)"))),
        tick_values: KNOWN_PERIODS.iter().map(|t| t.to_string()).collect(),
        tick_text,
        tick_angle: Some(0),
        ..Axis::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LINE_CHART_STRESSORS;
    use crate::error::HoneyError;

    fn period(token: &str) -> Period {
        token.parse().unwrap()
    }

    fn dataset() -> ColonyDataset {
        // Rows deliberately out of chronological order
        ColonyDataset::from_records(vec![
            ColonyRecord::new("Ohio", "OH", period("2015Q3"))
                .with(Stressor::VarroaMites, 30.0)
                .with(Stressor::LostPerc, 12.346),
            ColonyRecord::new("Ohio", "OH", period("2015Q1"))
                .with(Stressor::VarroaMites, 30.0)
                .with(Stressor::LostPerc, 5.0),
            ColonyRecord::new("Ohio", "OH", period("2015Q2")).with(Stressor::VarroaMites, 12.0),
            ColonyRecord::new("Iowa", "IA", period("2015Q1")).with(Stressor::VarroaMites, 99.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_points_sorted_by_period() {
        let chart = LineChart::build(&dataset(), &[Stressor::VarroaMites], "Ohio").unwrap();
        let periods: Vec<String> = chart.series[0]
            .points
            .iter()
            .map(|p| p.period.to_string())
            .collect();
        assert_eq!(periods, vec!["2015Q1", "2015Q2", "2015Q3"]);
    }

    #[test]
    fn test_max_marker_first_occurrence_wins() {
        let chart = LineChart::build(&dataset(), &[Stressor::VarroaMites], "Ohio").unwrap();
        let marker = chart.series[0].max_marker.as_ref().unwrap();
        assert_eq!(marker.period, period("2015Q1"));
        assert_eq!(marker.value, 30.0);
        assert_eq!(marker.text, "30.0%");
    }

    #[test]
    fn test_marker_label_rounded() {
        let chart = LineChart::build(&dataset(), &[Stressor::LostPerc], "Ohio").unwrap();
        let marker = chart.series[0].max_marker.as_ref().unwrap();
        assert_eq!(marker.value, 12.346);
        assert_eq!(marker.text, "12.35%");
    }

    #[test]
    fn test_marker_text() {
        assert_eq!(marker_text(30.0), "30.0%");
        assert_eq!(marker_text(0.0), "0.0%");
        assert_eq!(marker_text(11.1), "11.1%");
        assert_eq!(marker_text(0.5), "0.5%");
        assert_eq!(marker_text(12.346), "12.35%");
        assert_eq!(marker_text(0.125), "0.12%");
        assert_eq!(marker_text(0.375), "0.38%");
        assert_eq!(marker_text(2.675), "2.67%");
        assert_eq!(marker_text(99.999), "100.0%");
    }

    #[test]
    fn test_series_without_values_has_no_marker() {
        let chart = LineChart::build(&dataset(), &[Stressor::Diseases], "Ohio").unwrap();
        let series = &chart.series[0];
        assert_eq!(series.points.len(), 3);
        assert!(series.points.iter().all(|p| p.value.is_none()));
        assert!(series.max_marker.is_none());
    }

    #[test]
    fn test_state_without_rows_is_empty() {
        let chart = LineChart::build(&dataset(), &LINE_CHART_STRESSORS, "Hawaii").unwrap();
        assert_eq!(chart.series.len(), LINE_CHART_STRESSORS.len());
        assert!(chart.series.iter().all(|s| s.points.is_empty() && s.max_marker.is_none()));
    }

    #[test]
    fn test_colors_follow_trace_position() {
        let chart = LineChart::build(&dataset(), &LINE_CHART_STRESSORS, "Ohio").unwrap();
        let colors: Vec<&str> = chart.series.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, &LINE_PALETTE[..5]);

        let reversed: Vec<Stressor> = LINE_CHART_STRESSORS.iter().rev().copied().collect();
        let chart = LineChart::build(&dataset(), &reversed, "Iowa").unwrap();
        assert_eq!(chart.series[0].stressor, Stressor::LostPerc);
        assert_eq!(chart.series[0].color, "crimson");
    }

    #[test]
    fn test_unknown_state() {
        let err = LineChart::build(&dataset(), &[Stressor::VarroaMites], "ohio").unwrap_err();
        assert!(matches!(err, HoneyError::InvalidState(_)));
    }

    #[test]
    fn test_period_axis_labels_years() {
        let axis = period_axis();
        assert_eq!(axis.tick_values.len(), 16);
        assert_eq!(axis.tick_text[0], "2015");
        assert_eq!(axis.tick_text[1], "");
        assert_eq!(axis.tick_text[4], "2016");
    }

    #[test]
    fn test_title_names_state() {
        let chart = LineChart::build(&dataset(), &[Stressor::VarroaMites], "Ohio").unwrap();
        assert_eq!(chart.layout.title.text, "Bee Colony Stressors in the State of Ohio");
    }
}
