//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::dashboard::{self, CONFIG_PATH};
use crate::proxy;
use crate::state::AppState;

/// Liveness check path.
pub const HEALTH_PATH: &str = "/health";

/// Paths served by this router itself; camera endpoints must not reuse them.
/// `/` is the dashboard's `index.html`.
pub const RESERVED_PATHS: [&str; 3] = ["/", HEALTH_PATH, CONFIG_PATH];

/// Whether `path` can be mounted as a forwarded camera endpoint.
///
/// It must be a literal absolute path: no query or fragment, no route
/// parameters or wildcards, and none of the [`RESERVED_PATHS`].
#[must_use]
pub fn is_mountable(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains(['?', '#', '{', '}', '*'])
        && !path.split('/').any(|segment| segment.starts_with(':'))
        && !RESERVED_PATHS.contains(&path)
}

/// Build the top-level axum [`Router`].
///
/// The camera endpoints are mounted at the paths the dashboard config names;
/// any other path is looked up in `assets_dir`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
///
/// # Panics
///
/// Panics if either camera endpoint fails [`is_mountable`] or both are equal.
/// Callers validate the configuration first.
pub fn build(state: AppState, assets_dir: &Path) -> Router {
    let status_path = state.dashboard.status_endpoint.clone();
    let image_path = state.dashboard.image_endpoint.clone();

    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route(CONFIG_PATH, get(dashboard::config))
        .route(&status_path, get(proxy::forward))
        .route(&image_path, get(proxy::forward))
        .fallback_service(dashboard::assets(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
