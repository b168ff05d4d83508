//! Application state for the web server.

use std::sync::Arc;

use honeydash::Dashboard;

/// Shared application state.
///
/// The dashboard is never mutated after load, so handlers share it without
/// a lock.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
