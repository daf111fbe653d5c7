//! HTTP client wrapping `gloo-net` for the camera endpoints and `/config.json`.

use gloo_net::http::{Request, Response};
use thermaldash_app::ports::{FetchError, ThermalFeed};
use thermaldash_domain::config::DashboardConfig;
use thermaldash_domain::reading::StatusReading;

/// Path the daemon serves the dashboard configuration on.
pub const CONFIG_PATH: &str = "/config.json";

fn network(err: gloo_net::Error) -> FetchError {
    FetchError::Network(err.to_string())
}

fn decode(err: gloo_net::Error) -> FetchError {
    FetchError::Decode(err.to_string())
}

/// Reject non-2xx responses.
fn check_response(resp: Response) -> Result<Response, FetchError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(FetchError::Status(resp.status()))
    }
}

/// [`ThermalFeed`] over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    status_endpoint: String,
    image_endpoint: String,
}

impl HttpFeed {
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            status_endpoint: config.status_endpoint.clone(),
            image_endpoint: config.image_endpoint.clone(),
        }
    }
}

impl ThermalFeed for HttpFeed {
    async fn fetch_status(&self) -> Result<StatusReading, FetchError> {
        let resp = Request::get(&self.status_endpoint)
            .send()
            .await
            .map_err(network)?;
        check_response(resp)?
            .json::<StatusReading>()
            .await
            .map_err(decode)
    }

    async fn fetch_image(&self) -> Result<Vec<u8>, FetchError> {
        let resp = Request::get(&self.image_endpoint)
            .send()
            .await
            .map_err(network)?;
        check_response(resp)?.binary().await.map_err(decode)
    }
}

/// Fetch and validate the dashboard configuration.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request fails, the body is not a
/// configuration document, or the document fails validation.
pub async fn fetch_config() -> Result<DashboardConfig, FetchError> {
    let resp = Request::get(CONFIG_PATH).send().await.map_err(network)?;
    let config: DashboardConfig = check_response(resp)?.json().await.map_err(decode)?;
    config
        .validate()
        .map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(config)
}
