//! Chart handlers, one per chart kind.

use axum::{
    Json,
    extract::{Query, State},
};
use honeydash::ChartSpec;
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Query for the choropleth: a period token or a 1-based slider position.
#[derive(Debug, Deserialize)]
pub struct ChoroplethQuery {
    pub period: Option<String>,
    pub slider: Option<i32>,
    pub stressor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LineQuery {
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BubbleQuery {
    pub year: Option<i32>,
    pub top_n: Option<usize>,
}

pub async fn get_choropleth(
    State(state): State<AppState>,
    Query(query): Query<ChoroplethQuery>,
) -> Result<Json<ChartSpec>, ApiError> {
    let stressor = query
        .stressor
        .ok_or_else(|| ApiError::BadRequest("missing 'stressor'".to_string()))?;

    let spec = match (query.period, query.slider) {
        (Some(period), None) => state.dashboard.choropleth(&period, &stressor)?,
        (None, Some(slider)) => state.dashboard.choropleth_at(slider, &stressor)?,
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "give either 'period' or 'slider', not both".to_string(),
            ));
        }
        (None, None) => {
            return Err(ApiError::BadRequest(
                "missing 'period' or 'slider'".to_string(),
            ));
        }
    };

    Ok(Json(spec))
}

pub async fn get_line_chart(
    State(state): State<AppState>,
    Query(query): Query<LineQuery>,
) -> Result<Json<ChartSpec>, ApiError> {
    let name = query
        .state
        .ok_or_else(|| ApiError::BadRequest("missing 'state'".to_string()))?;
    Ok(Json(state.dashboard.line_chart(&name)?))
}

pub async fn get_bubble_chart(
    State(state): State<AppState>,
    Query(query): Query<BubbleQuery>,
) -> Result<Json<ChartSpec>, ApiError> {
    let year = query
        .year
        .ok_or_else(|| ApiError::BadRequest("missing 'year'".to_string()))?;
    Ok(Json(state.dashboard.bubble_chart(year, query.top_n)?))
}
