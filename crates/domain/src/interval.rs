//! Refresh interval shared by the image and status timers.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Period of both polling timers, in milliseconds. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RefreshInterval(NonZeroU32);

impl RefreshInterval {
    /// One second, the period the page starts with.
    pub const DEFAULT: Self = Self(NonZeroU32::MIN.saturating_add(999));

    /// Build an interval from milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidInterval`] when `millis` is zero.
    pub fn from_millis(millis: u32) -> Result<Self, DashboardError> {
        NonZeroU32::new(millis)
            .map(Self)
            .ok_or_else(|| DashboardError::InvalidInterval(millis.to_string()))
    }

    /// The period in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0.get()
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0.get()))
    }
}

impl Default for RefreshInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for RefreshInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

/// Parses the value of the interval `<select>`, e.g. `"2000"`.
impl FromStr for RefreshInterval {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| DashboardError::InvalidInterval(s.to_string()))
    }
}

impl TryFrom<u32> for RefreshInterval {
    type Error = DashboardError;

    fn try_from(millis: u32) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl From<RefreshInterval> for u32 {
    fn from(interval: RefreshInterval) -> Self {
        interval.as_millis()
    }
}
