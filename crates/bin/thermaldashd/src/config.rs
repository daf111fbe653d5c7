//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `thermaldash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thermaldash_adapter_http_axum::router;
use thermaldash_domain::config::DashboardConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Camera server the data endpoints are forwarded to.
    pub upstream: UpstreamConfig,
    /// Compiled dashboard bundle.
    pub assets: AssetsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Settings handed to the browser as `/config.json`.
    pub dashboard: DashboardConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Camera server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `http://127.0.0.1:5000`.
    pub url: String,
    /// Per-request timeout in seconds. Unset means requests wait as long as
    /// the camera server takes.
    pub timeout_secs: Option<u64>,
}

/// Static asset configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `index.html` and the wasm bundle.
    pub dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `thermaldash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("thermaldash.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("THERMALDASH_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("THERMALDASH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("THERMALDASH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("THERMALDASH_UPSTREAM") {
            self.upstream.url = val;
        }
        if let Ok(val) = std::env::var("THERMALDASH_ASSETS") {
            self.assets.dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("THERMALDASH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.upstream.url.starts_with("http://") && !self.upstream.url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "upstream url must be http(s): {:?}",
                self.upstream.url
            )));
        }
        if self.upstream.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "upstream timeout must be non-zero".to_string(),
            ));
        }
        // Both endpoints become routes of this server.
        for endpoint in [&self.dashboard.image_endpoint, &self.dashboard.status_endpoint] {
            if !router::is_mountable(endpoint) {
                return Err(ConfigError::Validation(format!(
                    "dashboard endpoint must be a plain absolute path other than {}: {endpoint:?}",
                    router::RESERVED_PATHS.join(", ")
                )));
            }
        }
        self.dashboard
            .validate()
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the upstream request timeout, if one is configured.
    #[must_use]
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("crates/adapters/dashboard_leptos/dist"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "thermaldashd=info,thermaldash=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
