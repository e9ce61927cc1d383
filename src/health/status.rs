// src/health/status.rs
use crate::plugin::ServiceState;
use std::fmt;

/// Cluster status word as reported by `_cluster/health`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterStatus {
    Green,
    Yellow,
    Red,
    Other(String),
}

impl ClusterStatus {
    pub fn parse(word: &str) -> Self {
        match word {
            "green" => ClusterStatus::Green,
            "yellow" => ClusterStatus::Yellow,
            "red" => ClusterStatus::Red,
            other => ClusterStatus::Other(other.to_string()),
        }
    }

    pub fn service_state(&self) -> ServiceState {
        match self {
            ClusterStatus::Green => ServiceState::Ok,
            ClusterStatus::Yellow => ServiceState::Warning,
            ClusterStatus::Red => ServiceState::Critical,
            ClusterStatus::Other(_) => ServiceState::Unknown,
        }
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterStatus::Green => f.write_str("green"),
            ClusterStatus::Yellow => f.write_str("yellow"),
            ClusterStatus::Red => f.write_str("red"),
            ClusterStatus::Other(word) => f.write_str(word),
        }
    }
}
