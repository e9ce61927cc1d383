// src/lib.rs
pub mod config;
pub mod health;
pub mod plugin;
pub mod timeout;

use crate::config::CheckConfig;
use crate::health::HealthChecker;
use crate::plugin::CheckResult;
use crate::timeout::TimeoutSupervisor;

/// Runs one full invocation: validate, query under the deadline, and
/// return the single result to report.
pub async fn run_check(config: &CheckConfig) -> CheckResult {
    if let Err(e) = config.validate() {
        return CheckResult::unknown(format!("invalid configuration: {}", e));
    }

    let checker = match HealthChecker::new(config) {
        Ok(checker) => checker,
        Err(e) => return CheckResult::new(e.state(), e.to_string()),
    };

    TimeoutSupervisor::new(config.timeout())
        .run(async move { checker.check().await })
        .await
}
