//! Shared application state for axum handlers.

use std::sync::Arc;

use thermaldash_domain::config::DashboardConfig;

use crate::proxy::Upstream;

/// Application state shared across all axum handlers.
///
/// `Clone` only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Client for the camera server.
    pub upstream: Arc<Upstream>,
    /// Settings handed to the browser dashboard.
    pub dashboard: Arc<DashboardConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(upstream: Upstream, dashboard: DashboardConfig) -> Self {
        Self {
            upstream: Arc::new(upstream),
            dashboard: Arc::new(dashboard),
        }
    }
}
