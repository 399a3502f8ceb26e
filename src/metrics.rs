//! Prometheus metrics.
//!
//! Counters and histograms are recorded through the `metrics` facade. When
//! metrics are disabled no recorder is installed and every call is a no-op.

use std::time::{Duration, Instant};

use anyhow::Context;
use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use marquee_config::ObservabilityConfig;

use crate::middleware::gate::GateOutcome;

/// Label for requests no route matched, so unknown URLs share one series.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Installs the Prometheus recorder and its upkeep task.
///
/// Must be called from inside the Tokio runtime. Returns `None` when metrics
/// are disabled.
pub fn init_metrics(config: &ObservabilityConfig) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.metrics_enabled {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0],
        )
        .context("failed to configure metric buckets")?
        .install_recorder()
        .context("failed to install Prometheus recorder")?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = path_label(&req);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status)
        .increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path)
        .record(start.elapsed().as_secs_f64());
    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Route template for the request, never the raw URI.
fn path_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned())
}

pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_gate_decision(outcome: GateOutcome) {
    counter!("admin_gate_decisions_total", "outcome" => outcome.as_str()).increment(1);
}

pub fn track_login_success(role: &'static str) {
    counter!("admin_logins_total", "status" => "success", "role" => role).increment(1);
}

pub fn track_login_failure(reason: &'static str) {
    counter!("admin_logins_total", "status" => "failure", "reason" => reason).increment(1);
}
