//! Widget options and dataset summary handlers.

use axum::{Json, extract::State};
use honeydash::{DatasetSummary, WidgetOptions};

use crate::server::state::AppState;

/// Dropdown entries, slider marks and initial selections.
pub async fn get_options(State(state): State<AppState>) -> Json<WidgetOptions> {
    Json(state.dashboard.options())
}

/// Row counts and coverage of the loaded datasets.
pub async fn get_summary(State(state): State<AppState>) -> Json<DatasetSummary> {
    Json(state.dashboard.summary())
}
