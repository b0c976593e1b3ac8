//! Metrics collection and exposition.
//!
//! # Metrics
//! - `uppercase_requests_total` (counter): requests by route, method, status
//! - `uppercase_request_duration_seconds` (histogram): latency by route, method
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`init_metrics`] installs the Prometheus exporter.

use std::net::{AddrParseError, SocketAddr};
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use thiserror::Error;

use crate::config::ObservabilityConfig;

/// Failure to start the metrics exporter.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid metrics address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: AddrParseError,
    },

    #[error("failed to install Prometheus exporter: {0}")]
    Install(#[from] BuildError),
}

/// Start the exporter when metrics are enabled; no-op otherwise.
pub fn init_from_config(config: &ObservabilityConfig) -> Result<(), MetricsError> {
    if !config.metrics_enabled {
        return Ok(());
    }

    let addr: SocketAddr = config.metrics_address.parse().map_err(|source| MetricsError::Address {
        address: config.metrics_address.clone(),
        source,
    })?;
    init_metrics(addr)?;
    Ok(())
}

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one finished request.
pub fn record_request(route: &str, method: &str, status: u16, start: Instant) {
    let labels = [
        ("route", route.to_string()),
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("uppercase_requests_total", &labels).increment(1);

    let labels = [("route", route.to_string()), ("method", method.to_string())];
    metrics::histogram!("uppercase_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}

/// Route-level middleware timing each matched request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&route, &method, response.status().as_u16(), start);
    response
}
