// src/config/models.rs
use std::time::Duration;
use url::Url;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const HEALTH_PATH: &str = "/_cluster/health";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Target host must not be empty")]
    EmptyHost,

    #[error("Target port must be between 1 and 65535")]
    InvalidPort,

    #[error("Timeout must be at least one second")]
    InvalidTimeout,

    #[error("Invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Where to find the cluster and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CheckConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `http://{host}:{port}/_cluster/health`, with IPv6 literals bracketed.
    pub fn health_url(&self) -> Result<Url, ConfigError> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        let url = Url::parse(&format!("http://{}:{}{}", host, self.port, HEALTH_PATH))?;
        Ok(url)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}
