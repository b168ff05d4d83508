//! Integration tests for honeydash: loading real-shaped files and building
//! charts from them.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use honeydash::{
    ChartSpec, ColonyDataset, ColonyRecord, Dashboard, DashboardConfig, HoneyError,
    LINE_CHART_STRESSORS, ProductionDataset, ProductionRecord, Stressor, build_bubble_chart,
    build_choropleth, build_line_chart, load_colony_data, load_production_data,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn line_ids() -> Vec<&'static str> {
    LINE_CHART_STRESSORS.iter().map(|s| s.id()).collect()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_colony_fixture() {
    let data = load_colony_data(fixture("colony.csv")).expect("load failed");

    assert_eq!(data.len(), 10);
    assert_eq!(data.source().format, "csv");
    assert_eq!(data.source().column_count, 13);
    assert!(data.source().hash.starts_with("sha256:"));

    let periods: Vec<String> = data
        .distinct_periods()
        .iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(periods, vec!["2015Q1", "2015Q2", "2015Q3"]);
}

#[test]
fn test_load_production_fixture() {
    let data = load_production_data(fixture("honey.csv")).expect("load failed");

    assert_eq!(data.len(), 7);
    assert_eq!(data.year_range(), Some((2000, 2001)));
}

#[test]
fn test_load_tsv_auto_detect() {
    let content = "state\tyear\thoney_colonies\tavg_price_per_lb\tyield_per_col\n\
                   Iowa\t2005\t40\t95.0\t71\n";
    let file = create_test_file(content);

    let data = ProductionDataset::load(file.path()).expect("load failed");
    assert_eq!(data.source().format, "tsv");
    assert_eq!(data.records()[0].honey_colonies, 40);
}

#[test]
fn test_missing_file_is_load_error() {
    let err = load_colony_data("/nonexistent/all_colony_data.csv").unwrap_err();
    assert!(matches!(err, HoneyError::Io { .. }));
    assert!(err.is_load_error());
}

#[test]
fn test_missing_required_column() {
    let file = create_test_file("state,year,honey_colonies,yield_per_col\nIowa,2000,1,2\n");
    let err = load_production_data(file.path()).unwrap_err();
    assert!(matches!(
        err,
        HoneyError::MissingColumn {
            dataset: "production",
            column: "avg_price_per_lb"
        }
    ));
}

#[test]
fn test_malformed_number() {
    let file = create_test_file(
        "state,year,honey_colonies,avg_price_per_lb,yield_per_col\nIowa,2000,many,60,70\n",
    );
    let err = load_production_data(file.path()).unwrap_err();
    assert!(matches!(err, HoneyError::InvalidValue { ref column, .. } if column == "honey_colonies"));
}

#[test]
fn test_empty_file() {
    let file = create_test_file("");
    let err = load_colony_data(file.path()).unwrap_err();
    assert!(matches!(err, HoneyError::EmptyData(_)));
}

// =============================================================================
// Charts from files
// =============================================================================

#[test]
fn test_choropleth_matches_raw_rows() {
    let data = load_colony_data(fixture("colony.csv")).unwrap();
    let spec = build_choropleth(&data, "2015Q1", "varroa_mites").unwrap();
    let chart = spec.as_choropleth().unwrap();

    let expected: Vec<(String, f64, String)> = data
        .records()
        .iter()
        .filter(|r| r.period.to_string() == "2015Q1")
        .map(|r| {
            (
                r.state_code.clone(),
                r.value(Stressor::VarroaMites).unwrap(),
                r.state.clone(),
            )
        })
        .collect();
    let actual: Vec<(String, f64, String)> = chart
        .regions
        .iter()
        .map(|r| (r.location.clone(), r.z, r.hover_text.clone()))
        .collect();

    assert!(!actual.is_empty());
    assert_eq!(actual, expected);
    assert_eq!(chart.color_scale.domain, [0.0, 70.0]);
}

#[test]
fn test_choropleth_known_period_without_data() {
    let data = load_colony_data(fixture("colony.csv")).unwrap();
    let spec = build_choropleth(&data, "2017Q4", "pesticides").unwrap();
    assert!(spec.is_empty());
    assert_eq!(spec.kind(), "choropleth");
}

#[test]
fn test_hawaii_without_disease_observations() {
    let data = load_colony_data(fixture("colony.csv")).unwrap();
    let spec = build_line_chart(&data, &line_ids(), "Hawaii").unwrap();
    let chart = spec.as_line().unwrap();

    assert_eq!(chart.series.len(), LINE_CHART_STRESSORS.len());

    let diseases = chart
        .series
        .iter()
        .find(|s| s.stressor == Stressor::Diseases)
        .unwrap();
    assert_eq!(diseases.points.len(), 3);
    assert!(diseases.max_marker.is_none());

    let varroa = &chart.series[0];
    let marker = varroa.max_marker.as_ref().unwrap();
    assert_eq!(marker.period.to_string(), "2015Q2");
    assert_eq!(marker.text, "11.1%");
}

#[test]
fn test_line_chart_for_state_absent_from_data() {
    let data = load_colony_data(fixture("colony.csv")).unwrap();
    let spec = build_line_chart(&data, &line_ids(), "Wyoming").unwrap();

    assert!(spec.is_empty());
    assert_eq!(spec.as_line().unwrap().series.len(), 5);
}

#[test]
fn test_bubble_chart_from_fixture() {
    let data = load_production_data(fixture("honey.csv")).unwrap();
    let spec = build_bubble_chart(&data, 2000, 10).unwrap();
    let chart = spec.as_bubble().unwrap();

    let states: Vec<&str> = chart.bubbles.iter().map(|b| b.state.as_str()).collect();
    assert_eq!(
        states,
        vec!["California", "North Dakota", "Florida", "South Dakota"]
    );
    assert_eq!(chart.bubbles[0].x, 0.595);
    assert_eq!(
        spec.title(),
        "Top 10 Honey Producing States In the Year 2000"
    );
}

#[test]
fn test_dashboard_load() {
    let config = DashboardConfig::new(fixture("colony.csv"), fixture("honey.csv"));
    let dashboard = Dashboard::load(config).expect("dashboard load failed");

    let options = dashboard.options();
    assert_eq!(options.period_slider.get(&1).map(String::as_str), Some("2015Q1"));
    assert_eq!(options.year_slider.len(), 2);

    let spec = dashboard.line_chart("California").unwrap();
    assert_eq!(spec.as_line().unwrap().series[0].points.len(), 3);

    assert!(dashboard.bubble_chart(1999, None).unwrap_err().is_parameter_error());
}

// =============================================================================
// End-to-end with synthetic data
// =============================================================================

#[test]
fn test_two_states_two_periods_choropleth() {
    let q1 = "2016Q1".parse().unwrap();
    let q2 = "2016Q2".parse().unwrap();
    let data = ColonyDataset::from_records(vec![
        ColonyRecord::new("Texas", "TX", q1).with(Stressor::Pesticides, 12.5),
        ColonyRecord::new("Maine", "ME", q1).with(Stressor::Pesticides, 3.0),
        ColonyRecord::new("Texas", "TX", q2).with(Stressor::Pesticides, 7.25),
        ColonyRecord::new("Maine", "ME", q2).with(Stressor::Pesticides, 0.0),
    ])
    .unwrap();

    let spec = build_choropleth(&data, "2016Q2", "pesticides").unwrap();
    let fills: Vec<(&str, f64)> = spec
        .as_choropleth()
        .unwrap()
        .regions
        .iter()
        .map(|r| (r.location.as_str(), r.z))
        .collect();
    assert_eq!(fills, vec![("TX", 7.25), ("ME", 0.0)]);
}

#[test]
fn test_top_two_of_three_states() {
    let data = ProductionDataset::from_records(vec![
        ProductionRecord::new("Minnesota", 2010, 80_000, 150.0, 60.0),
        ProductionRecord::new("Montana", 2010, 50_000, 140.0, 70.0),
        ProductionRecord::new("Florida", 2010, 100_000, 160.0, 55.0),
    ])
    .unwrap();

    let spec = build_bubble_chart(&data, 2010, 2).unwrap();
    let bubbles = &spec.as_bubble().unwrap().bubbles;

    assert_eq!(bubbles.len(), 2);
    assert_eq!(bubbles[0].state, "Florida");
    assert_eq!(bubbles[0].colonies, 100_000);
    assert_eq!(bubbles[1].state, "Minnesota");
    assert_eq!(bubbles[1].x, 1.5);
}

#[test]
fn test_chart_spec_round_trips_through_json() {
    let data = load_colony_data(fixture("colony.csv")).unwrap();
    let spec = build_line_chart(&data, &line_ids(), "California").unwrap();

    let json = spec.to_json_pretty().unwrap();
    let back: ChartSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}
