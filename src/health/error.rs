// src/health/error.rs
use crate::config::ConfigError;
use crate::plugin::ServiceState;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("error: {0}")]
    InvalidTarget(#[from] ConfigError),

    #[error("error: HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected Status {status} for {url}")]
    UnexpectedStatus { status: u16, url: Url },

    #[error("read error: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CheckError {
    /// Severity this failure is reported with.
    pub fn state(&self) -> ServiceState {
        match self {
            CheckError::InvalidTarget(_)
            | CheckError::Transport(_)
            | CheckError::UnexpectedStatus { .. } => ServiceState::Critical,
            CheckError::Client(_) | CheckError::BodyRead(_) | CheckError::Decode(_) => {
                ServiceState::Unknown
            }
        }
    }
}
