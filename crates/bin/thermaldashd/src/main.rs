//! # thermaldashd — thermal dashboard daemon
//!
//! Composition root that serves the browser dashboard next to the camera
//! server's data endpoints, so the page only ever talks to one origin.
//!
//! ## Responsibilities
//! - Load configuration (`thermaldash.toml`, env vars)
//! - Initialize `tracing`
//! - Build the upstream client and the axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;

use thermaldash_adapter_http_axum::proxy::Upstream;
use thermaldash_adapter_http_axum::router;
use thermaldash_adapter_http_axum::state::AppState;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let upstream = Upstream::new(&config.upstream.url, config.upstream_timeout())?;
    let state = AppState::new(upstream, config.dashboard.clone());
    let app = router::build(state, &config.assets.dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        upstream = %config.upstream.url,
        assets = %config.assets.dir.display(),
        "thermaldashd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("thermaldashd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown requested");
}
