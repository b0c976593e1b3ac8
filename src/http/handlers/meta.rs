use axum::{http::Uri, Json};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::http::response::{HealthStatus, ServiceInfo, Success};

/// Routes served by this process, as `(method, path, description)`.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "Service information and endpoint directory"),
    ("GET", "/health", "Liveness check"),
    ("POST", "/api/uppercase", "Uppercase the `text` field of a JSON body"),
    ("POST", "/api/uppercase-file", "Uppercase an uploaded text file (multipart field `file`)"),
];

/// Endpoint directory keyed by `"METHOD /path"`.
pub fn available_endpoints() -> Value {
    let map: Map<String, Value> = ENDPOINTS
        .iter()
        .map(|(method, path, description)| (format!("{} {}", method, path), Value::from(*description)))
        .collect();
    Value::Object(map)
}

pub async fn info() -> Json<Success<ServiceInfo>> {
    Json(Success::new(ServiceInfo {
        message: "Uppercase text service",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: available_endpoints(),
    }))
}

pub async fn health() -> Json<Success<HealthStatus>> {
    Json(Success::new(HealthStatus {
        message: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unmatched paths and methods. Logged once, by `AppError`.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}
