//! Dashboard configuration — endpoints, interval choices, log capacity.
//!
//! Served to the browser as `/config.json` and embedded in the daemon's TOML
//! file under `[dashboard]`. Every field has a default, so partial documents
//! are accepted.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::interval::RefreshInterval;
use crate::log::DEFAULT_LOG_CAPACITY;

/// Settings the browser dashboard starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path of the image endpoint (`GET`, binary JPEG).
    pub image_endpoint: String,
    /// Path of the status endpoint (`GET`, JSON).
    pub status_endpoint: String,
    /// Period selected when the page loads.
    pub default_interval_ms: RefreshInterval,
    /// Periods offered by the interval control, in display order.
    pub interval_choices_ms: Vec<RefreshInterval>,
    /// Number of log lines kept before the oldest is evicted.
    pub log_capacity: usize,
}

impl DashboardConfig {
    /// Check that the settings are usable together.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidConfig`] when an endpoint is empty,
    /// both endpoints are the same, no interval choice is offered, the default interval is not among the
    /// choices, or the log capacity is zero.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.image_endpoint.is_empty() || self.status_endpoint.is_empty() {
            return Err(DashboardError::InvalidConfig("endpoints must not be empty"));
        }
        if self.image_endpoint == self.status_endpoint {
            return Err(DashboardError::InvalidConfig(
                "image and status endpoints must differ",
            ));
        }
        if self.interval_choices_ms.is_empty() {
            return Err(DashboardError::InvalidConfig(
                "at least one interval choice is required",
            ));
        }
        if !self.interval_choices_ms.contains(&self.default_interval_ms) {
            return Err(DashboardError::InvalidConfig(
                "default interval must be one of the choices",
            ));
        }
        if self.log_capacity == 0 {
            return Err(DashboardError::InvalidConfig(
                "log capacity must be non-zero",
            ));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let ms = |v| RefreshInterval::from_millis(v).unwrap_or_default();
        Self {
            image_endpoint: "/image".to_string(),
            status_endpoint: "/status".to_string(),
            default_interval_ms: RefreshInterval::DEFAULT,
            interval_choices_ms: vec![ms(500), ms(1000), ms(2000), ms(5000)],
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_valid_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.image_endpoint, "/image");
        assert_eq!(config.status_endpoint, "/status");
        assert_eq!(config.default_interval_ms.as_millis(), 1000);
        assert_eq!(config.interval_choices_ms.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"log_capacity": 50}"#).unwrap();
        assert_eq!(config.log_capacity, 50);
        assert_eq!(config.status_endpoint, "/status");
    }

    #[test]
    fn should_reject_default_interval_outside_choices() {
        let config: DashboardConfig = serde_json::from_str(
            r#"{"default_interval_ms": 750, "interval_choices_ms": [500, 1000]}"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(DashboardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn should_reject_zero_log_capacity() {
        let config = DashboardConfig {
            log_capacity: 0,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_endpoint() {
        let config = DashboardConfig {
            image_endpoint: String::new(),
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_shared_endpoint() {
        let config = DashboardConfig {
            status_endpoint: "/image".to_string(),
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_interval_choice_when_deserialized() {
        let result =
            serde_json::from_str::<DashboardConfig>(r#"{"interval_choices_ms": [0, 1000]}"#);
        assert!(result.is_err());
    }
}
