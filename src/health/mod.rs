// src/health/mod.rs
mod checker;
mod error;
mod report;
mod status;

pub use checker::HealthChecker;
pub use error::CheckError;
pub use report::ClusterHealthReport;
pub use status::ClusterStatus;
