//! Thermal feed port — the camera server's `/status` and `/image` endpoints.

use std::future::Future;

use thermaldash_domain::reading::StatusReading;

/// Failure to obtain a response from the camera server.
///
/// Only the message text is kept, so browser adapters can build it from
/// their own error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(String),
    /// The server answered with a non-2xx status code.
    #[error("HTTP {0}")]
    Status(u16),
}

/// Source of status readings and image frames.
pub trait ThermalFeed {
    /// `GET /status`, decoded.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusReading, FetchError>>;

    /// `GET /image`, raw bytes of the current frame.
    fn fetch_image(&self) -> impl Future<Output = Result<Vec<u8>, FetchError>>;
}
