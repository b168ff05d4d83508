//! US choropleth of one stressor for one quarter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::spec::{Layout, Title};
use crate::catalog::{Period, Stressor};
use crate::dataset::ColonyDataset;
use crate::error::{HoneyError, Result};

/// Fixed color-scale domain in percent. Kept constant across quarters and
/// stressors so a shade means the same thing in every frame; values above
/// 70 saturate.
pub const COLOR_DOMAIN: [f64; 2] = [0.0, 70.0];

/// Fill value for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionValue {
    /// Two-letter postal code.
    pub location: String,
    pub z: f64,
    /// Full state name shown on hover.
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub name: String,
    pub domain: [f64; 2],
    pub auto: bool,
    pub colorbar_title: String,
}

/// Map projection and coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoScope {
    pub scope: String,
    pub projection: String,
    pub show_lakes: bool,
    pub lake_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethChart {
    pub layout: Layout,
    pub period: Period,
    pub stressor: Stressor,
    pub location_mode: String,
    pub regions: Vec<RegionValue>,
    pub color_scale: ColorScale,
    pub marker_line_color: String,
    pub geo: GeoScope,
}

impl ChoroplethChart {
    /// Build the map for `period` colored by `stressor`.
    ///
    /// States with no figure for the stressor in that quarter are left
    /// unfilled rather than drawn as zero.
    pub fn build(data: &ColonyDataset, period: Period, stressor: Stressor) -> Result<Self> {
        if !period.is_known() {
            return Err(HoneyError::InvalidPeriod(period.to_string()));
        }

        let regions: Vec<RegionValue> = data
            .for_period(period)
            .filter_map(|record| {
                record.value(stressor).map(|z| RegionValue {
                    location: record.state_code.clone(),
                    z,
                    hover_text: record.state.clone(),
                })
            })
            .collect();

        debug!(
            %period,
            stressor = stressor.id(),
            regions = regions.len(),
            "built choropleth"
        );

        let title = format!(
            "Honey Bee Colony Populations Affected By {} {}<br>(Hover for breakdown)",
            stressor.label(),
            period
        );

        Ok(Self {
            layout: Layout::new(Title::plain(title), 800, 500),
            period,
            stressor,
            location_mode: "USA-states".to_string(),
            regions,
            color_scale: ColorScale {
                name: "Reds".to_string(),
                domain: COLOR_DOMAIN,
                auto: false,
                colorbar_title: "population %".to_string(),
            },
            marker_line_color: "white".to_string(),
            geo: GeoScope {
                scope: "usa".to_string(),
                projection: "albers usa".to_string(),
                show_lakes: true,
                lake_color: "rgb(255, 255, 255)".to_string(),
            },
        })
    }
}
