//! Clock port — current time as the dashboard needs it.

use chrono::NaiveTime;

/// Source of the current time.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn epoch_millis(&self) -> i64;

    /// Local wall-clock time, for log line stamps.
    fn wall_time(&self) -> NaiveTime;
}
