//! Runtime configuration with validation.
//!
//! Defaults suit local development; production overrides come from the
//! environment (`DP_*` variables).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Main server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,
    /// Downstream data-lake relay configuration.
    pub datalake: DataLakeConfig,
    /// Block record persistence configuration.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

/// Data-lake relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLakeConfig {
    /// Downstream bulk-storage endpoint receiving accepted payloads.
    pub url: String,
    /// Connect timeout for the shared relay client.
    pub connect_timeout_ms: u64,
    /// Total request timeout for one relay attempt. A hung downstream is
    /// classified as a transport failure once this elapses.
    pub request_timeout_ms: u64,
    /// Maximum number of concurrent in-flight relays.
    pub max_in_flight: usize,
}

/// Block record persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File holding the persisted block records.
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            datalake: DataLakeConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            max_body_bytes: 4 * 1024 * 1024,
        }
    }
}

impl Default for DataLakeConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8090/hadoopserver/pushbigdata".to_string(),
            connect_timeout_ms: 2_000,
            request_timeout_ms: 5_000,
            max_in_flight: 8,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/blocks.bin"),
        }
    }
}

/// Configuration validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid data lake url: {0}")]
    InvalidDataLakeUrl(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("invalid relay pool size: {0}")]
    InvalidPoolSize(String),

    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}

impl ServerConfig {
    /// Load configuration: defaults overridden from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("DP_HTTP_PORT") {
            match port.parse() {
                Ok(p) => config.http.port = p,
                Err(_) => warn!("DP_HTTP_PORT is not a valid port, keeping default"),
            }
        }
        if let Ok(url) = std::env::var("DP_DATALAKE_URL") {
            config.datalake.url = url;
        }
        if let Ok(ms) = std::env::var("DP_RELAY_TIMEOUT_MS") {
            match ms.parse() {
                Ok(v) => config.datalake.request_timeout_ms = v,
                Err(_) => warn!("DP_RELAY_TIMEOUT_MS is not a number, keeping default"),
            }
        }
        if let Ok(n) = std::env::var("DP_RELAY_MAX_IN_FLIGHT") {
            match n.parse() {
                Ok(v) => config.datalake.max_in_flight = v,
                Err(_) => warn!("DP_RELAY_MAX_IN_FLIGHT is not a number, keeping default"),
            }
        }
        if let Ok(path) = std::env::var("DP_DATA_FILE") {
            config.storage.data_file = PathBuf::from(path);
        }

        config
    }

    /// Validate configuration before startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.datalake.url.starts_with("http://") && !self.datalake.url.starts_with("https://")
        {
            return Err(ConfigError::InvalidDataLakeUrl(self.datalake.url.clone()));
        }

        if self.datalake.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(
                "request_timeout_ms cannot be 0".into(),
            ));
        }
        if self.datalake.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout(
                "connect_timeout_ms cannot be 0".into(),
            ));
        }

        if self.datalake.max_in_flight == 0 {
            return Err(ConfigError::InvalidPoolSize(
                "max_in_flight cannot be 0".into(),
            ));
        }

        if self.http.max_body_bytes == 0 {
            return Err(ConfigError::InvalidLimit("max_body_bytes cannot be 0".into()));
        }

        Ok(())
    }

    /// HTTP server bind address.
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Relay connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.datalake.connect_timeout_ms)
    }

    /// Relay total request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.datalake.request_timeout_ms)
    }
}
