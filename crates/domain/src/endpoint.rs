//! URLs and file names derived from endpoint paths and the current time.

/// Append a `ts=<epoch_millis>` query parameter so the browser bypasses its
/// cache. The server ignores the value.
#[must_use]
pub fn cache_busted(endpoint: &str, epoch_millis: i64) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}ts={epoch_millis}")
}

/// Download name for a saved frame: `thermal_<epoch_millis>.jpg`.
#[must_use]
pub fn capture_filename(epoch_millis: i64) -> String {
    format!("thermal_{epoch_millis}.jpg")
}
