// src/plugin/result.rs
use nagiosplugin::{Metric, Resource, ServiceState};

/// Name the plugin reports under.
pub const RESOURCE_NAME: &str = "ELASTICSEARCH";

#[derive(Debug, Clone, PartialEq)]
pub struct PerfDatum {
    pub label: String,
    pub value: f64,
}

impl PerfDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The single terminal outcome of a check invocation, handed to
/// `nagiosplugin` for rendering and exit.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub state: ServiceState,
    pub message: String,
    pub perf_data: Vec<PerfDatum>,
}

impl CheckResult {
    pub fn new(state: ServiceState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
            perf_data: Vec::new(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(ServiceState::Critical, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ServiceState::Unknown, message)
    }

    pub fn with_perf_data(mut self, perf_data: Vec<PerfDatum>) -> Self {
        self.perf_data = perf_data;
        self
    }

    /// The state is fixed; perf data points carry no thresholds.
    pub fn into_resource(self) -> Resource {
        let mut resource = Resource::new(RESOURCE_NAME).with_fixed_state(self.state);
        if !self.message.is_empty() {
            resource = resource.with_description(self.message);
        }

        self.perf_data.into_iter().fold(resource, |resource, datum| {
            resource.with_result(Metric::new(datum.label, datum.value))
        })
    }
}
