//! Same-origin forwarding of the camera endpoints.

use std::time::Duration;

use axum::extract::{OriginalUri, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// HTTP client bound to the camera server's base URL.
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:5000`).
    ///
    /// Without `timeout` a request waits as long as the camera server takes,
    /// like the browser's own `fetch`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error when the client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are forwarded to, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET <base_url><path_and_query>` and relay status, content type and
    /// body unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError`] when no response arrives or its body cannot be
    /// read.
    pub async fn forward(&self, path_and_query: &str) -> Result<Response, ProxyError> {
        let url = format!("{}{path_and_query}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProxyError::Unreachable)?;

        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
        let body = resp.bytes().await.map_err(ProxyError::InvalidResponse)?;
        tracing::debug!(%url, %status, size = body.len(), "forwarded");

        let mut response = (status, body).into_response();
        if let Some(content_type) = content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }
        Ok(response)
    }
}

/// `GET /status`, `GET /image?ts=…` — relayed to the camera server with the
/// query string intact.
pub async fn forward(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ProxyError> {
    let path_and_query = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    state.upstream.forward(path_and_query).await
}
