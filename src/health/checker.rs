// src/health/checker.rs
use super::error::CheckError;
use super::report::ClusterHealthReport;
use crate::config::CheckConfig;
use crate::plugin::CheckResult;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};
use url::{Host, Url};

/// Queries one cluster's `_cluster/health` endpoint. The deadline is owned
/// by the caller, so the client carries no timeout of its own. Proxies come
/// from the environment except for loopback targets.
#[derive(Debug, Clone)]
pub struct HealthChecker {
    url: Url,
    client: Client,
}

impl HealthChecker {
    pub fn new(config: &CheckConfig) -> Result<Self, CheckError> {
        let url = config.health_url()?;
        let mut builder = Client::builder();
        if is_loopback(&url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(CheckError::Client)?;

        Ok(Self { url, client })
    }

    pub async fn fetch(&self) -> Result<ClusterHealthReport, CheckError> {
        debug!("Querying cluster health at {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(CheckError::Transport)?;

        let status = response.status();
        debug!(%status, "Cluster health responded");
        if status != StatusCode::OK {
            return Err(CheckError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await.map_err(CheckError::BodyRead)?;
        let report: ClusterHealthReport = serde_json::from_slice(&body)?;
        debug!(?report, "Decoded cluster health");

        Ok(report)
    }

    /// Runs the check once. Every failure becomes the returned result.
    pub async fn check(&self) -> CheckResult {
        match self.fetch().await {
            Ok(report) => {
                let result = report.evaluate();
                info!(
                    "Cluster {} is {} ({})",
                    report.cluster_name, report.status, result.state
                );
                result
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "Cluster health check failed");
                CheckResult::new(e.state(), e.to_string())
            }
        }
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
