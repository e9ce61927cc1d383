// src/plugin/mod.rs
mod result;

pub use nagiosplugin::ServiceState;
pub use result::{CheckResult, PerfDatum, RESOURCE_NAME};
