// src/health/report.rs
use super::status::ClusterStatus;
use crate::plugin::{CheckResult, PerfDatum};
use serde::Deserialize;

/// Body of `GET /_cluster/health`. Missing fields fall back to their
/// defaults and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClusterHealthReport {
    pub cluster_name: String,
    pub status: String,
    pub timed_out: bool,
    pub number_of_nodes: u64,
    pub number_of_data_nodes: u64,
    pub active_primary_shards: u64,
    pub active_shards: u64,
    pub relocating_shards: u64,
    pub initializing_shards: u64,
    pub unassigned_shards: u64,
}

impl ClusterHealthReport {
    pub fn cluster_status(&self) -> ClusterStatus {
        ClusterStatus::parse(&self.status)
    }

    pub fn perf_data(&self) -> Vec<PerfDatum> {
        vec![
            PerfDatum::new("number_of_nodes", self.number_of_nodes as f64),
            PerfDatum::new("number_of_data_nodes", self.number_of_data_nodes as f64),
            PerfDatum::new("active_primary_shards", self.active_primary_shards as f64),
            PerfDatum::new("active_shards", self.active_shards as f64),
            PerfDatum::new("unassigned_shards", self.unassigned_shards as f64),
        ]
    }

    /// Maps the report onto a check result. Perf data is attached whatever
    /// the status; an unrecognised status carries no message.
    pub fn evaluate(&self) -> CheckResult {
        let status = self.cluster_status();
        let state = status.service_state();

        let message = match status {
            ClusterStatus::Other(_) => String::new(),
            known => format!("Cluster '{}': Status is {}", self.cluster_name, known),
        };

        CheckResult::new(state, message).with_perf_data(self.perf_data())
    }
}
