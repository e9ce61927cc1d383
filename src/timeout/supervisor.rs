// src/timeout/supervisor.rs

use crate::plugin::CheckResult;
use std::future::Future;
use tokio::runtime::Builder;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, warn};

/// Races a check against a wall-clock deadline. Whichever side finishes
/// first produces the one result; the other is dropped.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutSupervisor {
    timeout: Duration,
}

impl TimeoutSupervisor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub async fn run<F>(&self, check: F) -> CheckResult
    where
        F: Future<Output = CheckResult> + Send + 'static,
    {
        let mut task = tokio::spawn(check);

        tokio::select! {
            joined = &mut task => match joined {
                Ok(result) => result,
                Err(e) => {
                    error!("Check task failed: {}", e);
                    CheckResult::unknown(format!("check aborted: {}", e))
                }
            },
            _ = sleep(self.timeout) => {
                task.abort();
                warn!("Check did not finish within {:?}", self.timeout);
                CheckResult::critical(format!(
                    "Timeout after {} seconds",
                    self.timeout.as_secs()
                ))
            }
        }
    }
}

/// Drives `check` on a fresh runtime and returns as soon as it resolves.
/// Blocking work still in flight (e.g. a DNS lookup outliving the
/// deadline) is left behind instead of holding up process exit.
pub fn run_detached<F>(check: F) -> std::io::Result<CheckResult>
where
    F: Future<Output = CheckResult>,
{
    let runtime = Builder::new_multi_thread().enable_all().build()?;
    let result = runtime.block_on(check);

    debug!("Releasing runtime without waiting for blocking tasks");
    runtime.shutdown_background();

    Ok(result)
}
