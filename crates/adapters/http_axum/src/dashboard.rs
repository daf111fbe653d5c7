//! Browser dashboard: configuration document and static bundle.

use std::path::Path;

use axum::Json;
use axum::extract::State;
use thermaldash_domain::config::DashboardConfig;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Path the browser loads its configuration from.
pub const CONFIG_PATH: &str = "/config.json";

/// `GET /config.json`
pub async fn config(State(state): State<AppState>) -> Json<DashboardConfig> {
    Json(DashboardConfig::clone(&state.dashboard))
}

/// Static files of the compiled dashboard (`index.html`, wasm, css).
pub fn assets(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(true)
}
