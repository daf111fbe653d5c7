//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body returned when forwarding fails.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Failure to relay a request to the camera server.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// No response was obtained (connection refused, timeout, …).
    #[error("camera server unreachable")]
    Unreachable(#[source] reqwest::Error),
    /// The response could not be read or relayed.
    #[error("invalid response from camera server")]
    InvalidResponse(#[source] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let source = match &self {
            Self::Unreachable(err) | Self::InvalidResponse(err) => err,
        };
        tracing::warn!(error = %source, "{self}");

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
